use std::sync::Arc;

use leptos::prelude::*;
use saas_platform::SiteConfig;
use saas_platform::collaborators::{
    MockBillingService, MockWebhookFeed, SharedBillingService, SharedWebhookFeed,
};
use saas_platform::format::DisplayFormat;
use tracing::{info, warn};

use crate::sections::LandingPage;
use crate::widgets::{BillingWidget, WebhookDashboard};

/// Whole site: landing page followed by both dashboards, backed by the
/// mock collaborators.
#[component]
pub fn App(#[prop(default = SiteConfig::default())] config: SiteConfig) -> impl IntoView {
    let display = config.display_format().unwrap_or_else(|e| {
        warn!("{e}; falling back to default timezone");
        DisplayFormat::default()
    });
    let lang = config.dashboard.language;

    let feed: SharedWebhookFeed = Arc::new(MockWebhookFeed::default());
    let billing: SharedBillingService =
        Arc::new(MockBillingService::default().with_portal_url(config.billing.portal_url.clone()));

    info!(
        "Mounting site (landing: {}, dashboards: {})",
        config.landing.initial_language, lang
    );

    view! {
        <LandingPage initial_language=config.landing.initial_language />
        <section class="bg-gray-100 py-12" data-role="dashboards">
            <WebhookDashboard feed=feed lang=lang display=display />
            <BillingWidget service=billing lang=lang display=display />
        </section>
    }
}
