// AI SaaS platform: browser entry point (`trunk serve`)

use leptos::prelude::*;
use saas_landing::{App, logging};
use saas_platform::SiteConfig;
use tracing::warn;

/// Baked in at build time; the browser has no filesystem to read it from.
const EMBEDDED_CONFIG: &str = include_str!("../../saas.toml");

fn main() {
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::INFO);

    let config = SiteConfig::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|e| {
        warn!("Invalid embedded config, using defaults: {e}");
        SiteConfig::default()
    });

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
