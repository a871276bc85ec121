//! Static HTML rendering through Leptos SSR.
//!
//! Each `render_*` function returns a complete document, including
//! `<!DOCTYPE html>`. Dashboards are rendered from an already loaded
//! snapshot; the browser app runs the load itself.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use saas_platform::billing::BillingSnapshot;
use saas_platform::format::DisplayFormat;
use saas_platform::webhooks::WebhookSnapshot;
use saas_platform::{Language, Text};

use crate::sections::LandingPage;
use crate::widgets::{BillingView, WebhookEventsView};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// `<html>` shell: charset, viewport, Tailwind, then the page body.
#[component]
pub fn SiteDocument(title: &'static str, lang: Language, children: Children) -> impl IntoView {
    view! {
        <html lang=lang.code() dir=lang.dir()>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>{title}</title>
                <script src=TAILWIND_CDN></script>
            </head>
            <body class="bg-gray-100">{children()}</body>
        </html>
    }
}

/// Landing page with the toggle starting in `lang`.
pub fn render_landing(lang: Language) -> String {
    let doc = view! {
        <SiteDocument title=Text::LandingTitle.in_lang(lang) lang=lang>
            <LandingPage initial_language=lang />
        </SiteDocument>
    };

    with_doctype(doc.to_html())
}

/// Webhook dashboard for a loaded snapshot. No refresh button: there is no
/// feed to query in a static page.
pub fn render_webhooks(snapshot: &WebhookSnapshot, lang: Language, display: DisplayFormat) -> String {
    let snapshot = snapshot.clone();
    let doc = view! {
        <SiteDocument title=Text::WebhookHeader.in_lang(lang) lang=lang>
            <div class="p-6 max-w-7xl mx-auto" dir=lang.dir()>
                <WebhookEventsView snapshot=snapshot lang=lang display=display />
            </div>
        </SiteDocument>
    };

    with_doctype(doc.to_html())
}

/// Billing widget for a loaded snapshot, with inert action buttons.
pub fn render_billing(snapshot: &BillingSnapshot, lang: Language, display: DisplayFormat) -> String {
    let snapshot = snapshot.clone();
    let doc = view! {
        <SiteDocument title=Text::BillingHeader.in_lang(lang) lang=lang>
            <div class="p-6 max-w-4xl mx-auto" dir=lang.dir()>
                <BillingView snapshot=snapshot lang=lang display=display />
            </div>
        </SiteDocument>
    };

    with_doctype(doc.to_html())
}

// Leptos doesn't include DOCTYPE, so we add it
fn with_doctype(html: String) -> String {
    format!("<!DOCTYPE html>\n{html}")
}
