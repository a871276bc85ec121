//! Webhook monitoring dashboard.
//!
//! [`WebhookDashboard`] owns the load cycle: it queries the feed on mount,
//! shows [`LoadingIndicator`] until the call settles, then renders
//! [`WebhookEventsView`] or an error banner. Refresh re-runs the same cycle.
//!
//! [`WebhookEventsView`] is stateless so a snapshot can be rendered to static
//! HTML without a feed.

use leptos::prelude::*;
use leptos::task::spawn_local;
use saas_platform::collaborators::SharedWebhookFeed;
use saas_platform::format::DisplayFormat;
use saas_platform::webhooks::{EventRow, WebhookDashboardState, WebhookSnapshot};
use saas_platform::{Language, LoadSequence, LoadState, Text};
use tracing::debug;

use super::common::{
    ErrorBanner, ICON_ARROW_CLOCKWISE, Icon, LoadingIndicator, PanelHeader, StatCard, StatusBadge,
};

#[component]
pub fn WebhookDashboard(
    /// Source of webhook events
    feed: SharedWebhookFeed,
    #[prop(default = Language::Hebrew)] lang: Language,
    #[prop(default = DisplayFormat::default())] display: DisplayFormat,
) -> impl IntoView {
    let state = RwSignal::new(WebhookDashboardState::Loading);
    let feed = StoredValue::new(feed);
    let loads = StoredValue::new(LoadSequence::default());

    let reload = move || {
        let ticket = loads.write_value().next();
        state.set(LoadState::Loading);
        let feed = feed.get_value();
        spawn_local(async move {
            let outcome = WebhookSnapshot::load(feed.as_ref()).await;
            if !loads.try_with_value(|l| l.is_current(ticket)).unwrap_or(false) {
                debug!("Dropping superseded webhook load {ticket}");
                return;
            }
            if state.try_set(LoadState::settle(outcome, "webhook events")).is_some() {
                debug!("Webhook dashboard unmounted before events arrived");
            }
        });
    };

    // Browser only: effects never run during static rendering
    Effect::new(move || reload());

    let on_refresh = Callback::new(move |_| reload());

    view! {
        <div class="p-6 max-w-7xl mx-auto" dir=lang.dir() lang=lang.code()>
            {move || state_view(state.get(), lang, display, on_refresh)}
        </div>
    }
}

fn state_view(
    state: WebhookDashboardState,
    lang: Language,
    display: DisplayFormat,
    on_refresh: Callback<()>,
) -> AnyView {
    match state {
        LoadState::Loading => {
            view! { <LoadingIndicator message=Text::WebhookLoading.in_lang(lang) /> }.into_any()
        }
        LoadState::Ready(snapshot) => {
            view! {
                <WebhookEventsView
                    snapshot=snapshot
                    lang=lang
                    display=display
                    on_refresh=on_refresh
                />
            }
                .into_any()
        }
        LoadState::Failed(message) => {
            view! {
                <ErrorBanner
                    title=Text::WebhookLoadFailed.in_lang(lang)
                    detail=message
                    retry_label=Text::Retry.in_lang(lang)
                    on_retry=on_refresh
                />
            }
                .into_any()
        }
    }
}

/// Header, summary cards and event table for a loaded snapshot.
#[component]
pub fn WebhookEventsView(
    snapshot: WebhookSnapshot,
    #[prop(default = Language::Hebrew)] lang: Language,
    #[prop(default = DisplayFormat::default())] display: DisplayFormat,
    /// Renders the refresh button when present
    #[prop(optional)]
    on_refresh: Option<Callback<()>>,
) -> impl IntoView {
    let stats = snapshot.stats;
    let rows = snapshot.rows(&display, lang);
    let t = move |key: Text| key.in_lang(lang);

    view! {
        <div>
            <PanelHeader title=t(Text::WebhookHeader) description=t(Text::WebhookDescription) />

            <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-8">
                <StatCard label=t(Text::TotalEvents) value=stats.total value_class="text-gray-900" />
                <StatCard label=t(Text::Succeeded) value=stats.success value_class="text-green-600" />
                <StatCard label=t(Text::Failures) value=stats.failed value_class="text-red-600" />
                <StatCard label=t(Text::Waiting) value=stats.pending value_class="text-yellow-600" />
            </div>

            <div class="bg-white rounded-lg shadow overflow-hidden">
                <div class="px-6 py-4 border-b border-gray-200">
                    <h2 class="text-lg font-medium text-gray-900">{t(Text::RecentEvents)}</h2>
                </div>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <HeaderCell label=t(Text::EventType) />
                                <HeaderCell label=t(Text::Time) />
                                <HeaderCell label=t(Text::Status) />
                                <HeaderCell label=t(Text::Data) />
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {rows
                                .into_iter()
                                .map(|row| view! { <EventRowView row=row /> })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </div>
            </div>

            {on_refresh.map(|refresh| {
                view! {
                    <div class="mt-6 flex justify-center">
                        <button
                            class="flex items-center gap-2 px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors"
                            data-role="refresh"
                            on:click=move |_| refresh.run(())
                        >
                            <Icon path=ICON_ARROW_CLOCKWISE size="16" />
                            {t(Text::RefreshData)}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}

#[component]
fn HeaderCell(label: &'static str) -> impl IntoView {
    view! {
        <th class="px-6 py-3 text-start text-xs font-medium text-gray-500 uppercase tracking-wider">
            {label}
        </th>
    }
}

#[component]
fn EventRowView(row: EventRow) -> impl IntoView {
    view! {
        <tr class="hover:bg-gray-50" data-event-id=row.id>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{row.kind}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{row.time}</td>
            <td class="px-6 py-4 whitespace-nowrap">
                <StatusBadge label=row.status_label class=row.badge_class />
            </td>
            <td class="px-6 py-4 text-sm text-gray-500">
                <pre class="text-xs bg-gray-100 p-2 rounded max-w-xs overflow-hidden">{row.preview}</pre>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use saas_platform::collaborators::MockWebhookFeed;

    const NOW: i64 = 1_791_972_300_000;

    fn render(state: WebhookDashboardState, lang: Language) -> String {
        state_view(state, lang, DisplayFormat::default(), Callback::new(|_| ())).to_html()
    }

    #[test]
    fn failed_load_shows_alert_with_retry() {
        let html = render(LoadState::Failed("feed offline".into()), Language::English);

        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("Could not load webhook events."));
        assert!(html.contains("feed offline"));
        assert!(html.contains("Try again"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn failed_load_in_hebrew() {
        let html = render(LoadState::Failed("feed offline".into()), Language::Hebrew);

        assert!(html.contains("role=\"alert\""));
        assert!(html.contains(Text::WebhookLoadFailed.in_lang(Language::Hebrew)));
        assert!(html.contains("נסה שוב"));
    }

    #[tokio::test]
    async fn columns_read_type_time_status_data() {
        let snapshot = WebhookSnapshot::load(&MockWebhookFeed::at(NOW)).await.unwrap();
        let html = render(LoadState::Ready(snapshot), Language::English);

        let section = |open: &str, close: &str| {
            let start = html.find(open).unwrap_or_else(|| panic!("{open} missing"));
            let end = start + html[start..].find(close).unwrap_or_else(|| panic!("{close} missing"));
            &html[start..end]
        };
        let order = |text: &str, needles: &[&str]| {
            let positions: Vec<usize> = needles
                .iter()
                .map(|n| text.find(n).unwrap_or_else(|| panic!("{n} missing")))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{needles:?} out of order");
        };

        order(section("<thead", "</thead>"), &["Event type", "Time", "Status", "Data"]);
        // Row cells follow the header
        order(section("<tr class=\"hover:bg-gray-50\"", "</tr>"), &["</td>", "/2026", "<span", "<pre"]);

        assert!(html.contains("text-start"));
        assert!(!html.contains("text-right"));
        assert!(html.contains("data-role=\"refresh\""));
    }
}
