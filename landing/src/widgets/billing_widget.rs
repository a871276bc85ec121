//! Subscription and billing panel.
//!
//! [`BillingWidget`] loads subscription, billing profile and invoices on
//! mount and wires the two actions (cancel, update payment method) to the
//! billing service. [`BillingView`] is the stateless presentation of a
//! loaded [`BillingSnapshot`].

use leptos::prelude::*;
use leptos::task::spawn_local;
use saas_platform::billing::{BillingSnapshot, BillingWidgetState, CancelDialog, InvoiceRow};
use saas_platform::collaborators::SharedBillingService;
use saas_platform::format::{DisplayFormat, masked_card};
use saas_platform::types::PaymentMethod;
use saas_platform::{Language, LoadSequence, LoadState, Text};
use tracing::{debug, error, info};

use super::cancel_dialog::CancelDialogView;
use super::common::{ErrorBanner, ICON_CREDIT_CARD, Icon, LoadingIndicator, PanelHeader, StatusBadge};

#[component]
pub fn BillingWidget(
    /// Billing collaborator
    service: SharedBillingService,
    #[prop(default = Language::Hebrew)] lang: Language,
    #[prop(default = DisplayFormat::default())] display: DisplayFormat,
) -> impl IntoView {
    let state = RwSignal::new(BillingWidgetState::Loading);
    let dialog = RwSignal::new(CancelDialog::default());
    let portal_error = RwSignal::new(None::<String>);
    let service = StoredValue::new(service);
    let loads = StoredValue::new(LoadSequence::default());

    let reload = move || {
        let ticket = loads.write_value().next();
        state.set(LoadState::Loading);
        let service = service.get_value();
        spawn_local(async move {
            let outcome = BillingSnapshot::load(service.as_ref()).await;
            if !loads.try_with_value(|l| l.is_current(ticket)).unwrap_or(false) {
                debug!("Dropping superseded billing load {ticket}");
                return;
            }
            if state.try_set(LoadState::settle(outcome, "billing data")).is_some() {
                debug!("Billing widget unmounted before data arrived");
            }
        });
    };

    Effect::new(move || reload());

    let confirm_cancel = Callback::new(move |_| {
        let Some(subscription_id) =
            state.with_untracked(|s| s.ready().map(|snap| snap.subscription.id.clone()))
        else {
            return;
        };
        let Some(ticket) = dialog.try_update(|d| d.begin_confirm()).flatten() else {
            debug!("Cancellation already in flight");
            return;
        };
        let service = service.get_value();
        spawn_local(async move {
            let outcome = service.cancel_subscription(&subscription_id).await;
            if dialog.try_update(|d| d.settle(ticket, outcome)).is_none() {
                debug!("Billing widget unmounted before cancellation settled");
            }
        });
    });

    let update_payment = Callback::new(move |_| {
        let Some(customer_id) =
            state.with_untracked(|s| s.ready().map(|snap| snap.billing_info.customer_id.clone()))
        else {
            return;
        };
        portal_error.set(None);
        let service = service.get_value();
        spawn_local(async move {
            let failure = match service.create_portal_session(&customer_id).await {
                Ok(url) => {
                    info!("Billing portal session ready");
                    open_in_new_tab(&url).err()
                }
                Err(e) => Some(e.to_string()),
            };
            if let Some(message) = failure {
                error!("Failed to open billing portal: {message}");
                if portal_error.try_set(Some(message)).is_some() {
                    debug!("Billing widget unmounted before portal session settled");
                }
            }
        });
    });

    let on_open_cancel = Callback::new(move |_| dialog.update(|d| d.open()));
    let on_retry = Callback::new(move |_| reload());

    view! {
        <div class="p-6 max-w-4xl mx-auto" dir=lang.dir() lang=lang.code()>
            {move || state_view(state.get(), lang, display, on_retry, update_payment, on_open_cancel)}

            {move || portal_error.get().map(|message| portal_banner(message, lang))}

            <CancelDialogView dialog=dialog lang=lang on_confirm=confirm_cancel />
        </div>
    }
}

fn state_view(
    state: BillingWidgetState,
    lang: Language,
    display: DisplayFormat,
    on_retry: Callback<()>,
    on_update_payment: Callback<()>,
    on_cancel: Callback<()>,
) -> AnyView {
    match state {
        LoadState::Loading => {
            view! { <LoadingIndicator message=Text::BillingLoading.in_lang(lang) /> }.into_any()
        }
        LoadState::Ready(snapshot) => {
            view! {
                <BillingView
                    snapshot=snapshot
                    lang=lang
                    display=display
                    on_update_payment=on_update_payment
                    on_cancel=on_cancel
                />
            }
                .into_any()
        }
        LoadState::Failed(message) => {
            view! {
                <ErrorBanner
                    title=Text::BillingLoadFailed.in_lang(lang)
                    detail=message
                    retry_label=Text::Retry.in_lang(lang)
                    on_retry=on_retry
                />
            }
                .into_any()
        }
    }
}

fn portal_banner(message: String, lang: Language) -> AnyView {
    view! {
        <div class="mt-4">
            <ErrorBanner title=Text::PortalFailed.in_lang(lang) detail=message />
        </div>
    }
    .into_any()
}

/// Subscription panel, payment card and invoice table for a loaded snapshot.
///
/// Action buttons always render; without handlers they do nothing.
#[component]
pub fn BillingView(
    snapshot: BillingSnapshot,
    #[prop(default = Language::Hebrew)] lang: Language,
    #[prop(default = DisplayFormat::default())] display: DisplayFormat,
    #[prop(optional)] on_update_payment: Option<Callback<()>>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let t = move |key: Text| key.in_lang(lang);
    let (status_label, status_class) = snapshot.subscription_badge(lang);
    let price = snapshot.plan_price();
    let show_warning = snapshot.shows_period_end_warning();
    let can_cancel = snapshot.can_cancel();
    let rows = snapshot.invoice_rows(&display, lang);
    let subscription = snapshot.subscription;
    let payment_method = snapshot.billing_info.payment_method;

    view! {
        <div>
            <PanelHeader title=t(Text::BillingHeader) description=t(Text::BillingDescription) />

            <section class="bg-white rounded-lg shadow p-6 mb-6" data-role="subscription">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold text-gray-900">{t(Text::CurrentSubscription)}</h2>
                    <StatusBadge label=status_label class=status_class />
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6">
                    <div>
                        <h3 class="text-lg font-medium text-gray-900 mb-2">{subscription.plan_name}</h3>
                        <p class="text-3xl font-bold text-blue-600">
                            {price}
                            <span class="text-lg text-gray-500 mx-1">{t(Text::PerMonth)}</span>
                        </p>
                    </div>
                    <div class="space-y-2 text-sm text-gray-600">
                        <p>{format!("{}: {}", t(Text::PeriodStart), display.date(subscription.current_period_start))}</p>
                        <p>{format!("{}: {}", t(Text::PeriodEnd), display.date(subscription.current_period_end))}</p>
                    </div>
                </div>

                {show_warning.then(|| {
                    view! {
                        <div class="bg-yellow-50 border border-yellow-200 rounded-md p-4 mb-4 text-yellow-800" data-role="period-end-warning">
                            {t(Text::CancelAtPeriodEndWarning)}
                        </div>
                    }
                })}

                <div class="flex gap-3">
                    <button
                        class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors"
                        data-role="update-payment"
                        on:click=move |_| {
                            if let Some(handler) = on_update_payment {
                                handler.run(());
                            }
                        }
                    >
                        {t(Text::UpdatePaymentMethod)}
                    </button>
                    {can_cancel.then(|| {
                        view! {
                            <button
                                class="px-4 py-2 bg-red-600 text-white rounded-md hover:bg-red-700 transition-colors"
                                data-role="cancel-subscription"
                                on:click=move |_| {
                                    if let Some(handler) = on_cancel {
                                        handler.run(());
                                    }
                                }
                            >
                                {t(Text::CancelSubscription)}
                            </button>
                        }
                    })}
                </div>
            </section>

            {payment_method.map(|method| view! { <PaymentMethodCard method=method lang=lang /> })}

            <section class="bg-white rounded-lg shadow overflow-hidden">
                <div class="px-6 py-4 border-b border-gray-200">
                    <h2 class="text-lg font-medium text-gray-900">{t(Text::RecentInvoices)}</h2>
                </div>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-start text-xs font-medium text-gray-500 uppercase">{t(Text::Date)}</th>
                                <th class="px-6 py-3 text-start text-xs font-medium text-gray-500 uppercase">{t(Text::Amount)}</th>
                                <th class="px-6 py-3 text-start text-xs font-medium text-gray-500 uppercase">{t(Text::Status)}</th>
                                <th class="px-6 py-3 text-start text-xs font-medium text-gray-500 uppercase">{t(Text::Actions)}</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {rows
                                .into_iter()
                                .map(|row| view! { <InvoiceRowView row=row download_label=t(Text::DownloadPdf) /> })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </div>
            </section>
        </div>
    }
    .into_any()
}

#[component]
fn PaymentMethodCard(method: PaymentMethod, lang: Language) -> impl IntoView {
    view! {
        <section class="bg-white rounded-lg shadow p-6 mb-6" data-role="payment-method">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">{Text::PaymentMethod.in_lang(lang)}</h2>
            <div class="flex items-center gap-4">
                <div class="w-12 h-8 bg-gradient-to-r from-blue-600 to-purple-600 rounded flex items-center justify-center text-white text-xs font-bold">
                    {method.brand.to_uppercase()}
                </div>
                <div>
                    <p class="font-medium flex items-center gap-2">
                        <Icon path=ICON_CREDIT_CARD size="16" class="text-gray-500" />
                        {masked_card(&method.last4)}
                    </p>
                    <p class="text-sm text-gray-600">{method.kind}</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InvoiceRowView(row: InvoiceRow, download_label: &'static str) -> impl IntoView {
    view! {
        <tr data-invoice-id=row.id>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{row.date}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{row.amount}</td>
            <td class="px-6 py-4 whitespace-nowrap">
                <StatusBadge label=row.status_label class=row.badge_class />
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm">
                <a
                    href=row.url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-blue-600 hover:text-blue-900"
                >
                    {download_label}
                </a>
            </td>
        </tr>
    }
}

/// Open `url` in a new tab, falling back to the current tab when the popup
/// is blocked.
fn open_in_new_tab(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no browser window".to_string())?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        _ => window
            .location()
            .set_href(url)
            .map_err(|e| format!("navigation failed: {e:?}")),
    }
}
