//! # saas-platform
//!
//! View-state model behind the AI SaaS platform landing page and its two
//! dashboard widgets (webhook event log, subscription/billing panel).
//!
//! Nothing in here touches the DOM. The Leptos crate renders what this crate
//! computes, so every state transition, lookup table and formatter can be
//! tested on the host.
//!
//! ## Architecture
//!
//! - [`types`] - Display records (events, subscription, invoices, ...)
//! - [`collaborators`] - Webhook feed and billing service contracts, plus mocks
//! - [`load`] - `Loading -> Ready | Failed` state machine shared by both dashboards
//! - [`webhooks`] - Webhook snapshot and derived stats
//! - [`billing`] - Billing snapshot and the cancel-subscription dialog
//! - [`status`] - Status -> badge tone / label lookup tables
//! - [`i18n`] - English/Hebrew string table and the landing language toggle
//! - [`features`] - Landing page feature cards
//! - [`format`] - he-IL timestamp, date and currency formatting
//! - [`config`] - `saas.toml` configuration
//! - [`error`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use saas_platform::collaborators::MockWebhookFeed;
//! use saas_platform::webhooks::WebhookSnapshot;
//!
//! # futures::executor::block_on(async {
//! let feed = MockWebhookFeed::at(1_700_000_000_000);
//! let snapshot = WebhookSnapshot::load(&feed).await.unwrap();
//! assert_eq!(snapshot.stats.total, 3);
//! # });
//! ```

pub mod billing;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod features;
pub mod format;
pub mod i18n;
pub mod load;
pub mod status;
pub mod types;
pub mod webhooks;

pub use config::SiteConfig;
pub use error::{CollaboratorError, ConfigError};
pub use i18n::{Language, LanguageToggle, Text};
pub use load::{LoadSequence, LoadState};
