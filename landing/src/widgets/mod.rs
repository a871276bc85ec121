// Dashboard widgets

mod billing_widget;
mod cancel_dialog;
pub mod common;
mod webhook_dashboard;

pub use billing_widget::{BillingView, BillingWidget};
pub use cancel_dialog::CancelDialogView;
pub use webhook_dashboard::{WebhookDashboard, WebhookEventsView};
