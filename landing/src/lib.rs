//! # saas-landing
//!
//! Leptos 0.8 front end for the AI SaaS platform template:
//!
//! - [`sections::LandingPage`] - bilingual marketing page with an
//!   English/Hebrew toggle that flips the layout between LTR and RTL
//! - [`widgets::WebhookDashboard`] - recent webhook events with summary counts
//! - [`widgets::BillingWidget`] - subscription, payment method, invoices and
//!   the cancel-subscription dialog
//!
//! The binary mounts [`App`] in the browser (`csr` feature, built with
//! Trunk). On the host, [`render`] turns the same components into static
//! HTML documents through Leptos SSR.
//!
//! ```rust,ignore
//! use saas_landing::render::render_landing;
//! use saas_platform::Language;
//!
//! let html = render_landing(Language::Hebrew);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

// Nested billing view types exceed the default query depth
#![recursion_limit = "256"]

mod app;
pub mod logging;
pub mod render;
pub mod sections;
pub mod widgets;

pub use app::App;
