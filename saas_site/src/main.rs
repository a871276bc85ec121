//! # saas-site
//!
//! Host-side companion of the AI SaaS front end.
//!
//! ```bash
//! # Landing page in Hebrew
//! saas-site render landing --lang he --out landing.html
//!
//! # Dashboards, rendered after the mock collaborators answer
//! saas-site render webhooks
//! saas-site render billing --lang en
//!
//! # Raw mock data as JSON
//! saas-site snapshot billing
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use saas_landing::render::{render_billing, render_landing, render_webhooks};
use saas_platform::billing::BillingSnapshot;
use saas_platform::collaborators::{MockBillingService, MockWebhookFeed};
use saas_platform::config::CONFIG_FILE;
use saas_platform::webhooks::WebhookSnapshot;
use saas_platform::{Language, SiteConfig};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "saas-site")]
#[command(about = "Render the AI SaaS landing page and dashboards to static HTML")]
#[command(version)]
struct Args {
    /// Config file (defaults to ./saas.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a view to a complete HTML document
    Render {
        page: Page,

        /// Language of the view (en, he); defaults to the configured one
        #[arg(long)]
        lang: Option<Language>,

        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print mock collaborator data as JSON
    Snapshot { kind: Dashboard },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Page {
    Landing,
    Webhooks,
    Billing,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Dashboard {
    Webhooks,
    Billing,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the document, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Render { page, lang, out } => {
            let html = render(page, lang, &config).await?;
            emit(&html, out.as_deref())
        }
        Command::Snapshot { kind } => {
            let json = snapshot_json(kind, &config).await?;
            println!("{json}");
            Ok(())
        }
    }
}

/// An explicit `--config` must load; the implicit `saas.toml` may be absent.
fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(SiteConfig::load_from_path(Path::new(CONFIG_FILE))),
    }
}

async fn render(page: Page, lang: Option<Language>, config: &SiteConfig) -> Result<String> {
    let display = config.display_format()?;

    let html = match page {
        Page::Landing => {
            let lang = lang.unwrap_or(config.landing.initial_language);
            info!("Rendering landing page ({lang})");
            render_landing(lang)
        }
        Page::Webhooks => {
            let lang = lang.unwrap_or(config.dashboard.language);
            let snapshot = WebhookSnapshot::load(&MockWebhookFeed::default()).await?;
            info!("Rendering webhook dashboard ({lang}, {} events)", snapshot.events.len());
            render_webhooks(&snapshot, lang, display)
        }
        Page::Billing => {
            let lang = lang.unwrap_or(config.dashboard.language);
            let snapshot = BillingSnapshot::load(&billing_service(config)).await?;
            info!("Rendering billing widget ({lang}, {} invoices)", snapshot.invoices.len());
            render_billing(&snapshot, lang, display)
        }
    };

    Ok(html)
}

async fn snapshot_json(kind: Dashboard, config: &SiteConfig) -> Result<String> {
    let json = match kind {
        Dashboard::Webhooks => {
            let snapshot = WebhookSnapshot::load(&MockWebhookFeed::default()).await?;
            serde_json::to_string_pretty(&snapshot)?
        }
        Dashboard::Billing => {
            let snapshot = BillingSnapshot::load(&billing_service(config)).await?;
            serde_json::to_string_pretty(&snapshot)?
        }
    };

    Ok(json)
}

fn billing_service(config: &SiteConfig) -> MockBillingService {
    MockBillingService::default().with_portal_url(config.billing.portal_url.clone())
}

fn emit(html: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} ({} bytes)", path.display(), html.len());
        }
        None => {
            debug!("Writing {} bytes to stdout", html.len());
            println!("{html}");
        }
    }
    Ok(())
}
