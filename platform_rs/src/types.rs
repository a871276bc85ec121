//! Display records for the dashboards.
//!
//! These types are what the collaborators hand back and what the widgets
//! render. They're designed to be:
//!
//! - **Serializable** - camelCase JSON, matching the billing/webhook payloads
//! - **Clone-friendly** - they live inside reactive signals
//! - **Never mutated** - a mount builds them, a refresh replaces them
//!
//! Timestamps are epoch milliseconds, amounts are minor currency units.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Processing status of a webhook event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Handler processed the event
    Success,
    /// Handler failed
    Failed,
    /// Not processed yet
    Pending,
}

impl EventStatus {
    /// Wire name (`"success"`, `"failed"`, `"pending"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Pending => "pending",
        }
    }
}

/// A single webhook delivery as shown in the event log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Event id (`evt_...`)
    pub id: String,
    /// Event type tag, e.g. `invoice.payment_failed`
    #[serde(rename = "type")]
    pub kind: String,
    /// Creation time, epoch millis
    pub created: i64,
    /// Opaque payload
    pub data: JsonValue,
    /// Processing status
    pub status: EventStatus,
}

/// Counts derived from a list of events.
///
/// `total == success + failed + pending` always holds for values built with
/// [`WebhookStats::from_events`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookStats {
    /// Number of events
    pub total: usize,
    /// Events with status `success`
    pub success: usize,
    /// Events with status `failed`
    pub failed: usize,
    /// Events with status `pending`
    pub pending: usize,
}

impl WebhookStats {
    /// Partition `events` by status.
    pub fn from_events(events: &[WebhookEvent]) -> Self {
        let count = |status: EventStatus| events.iter().filter(|e| e.status == status).count();

        Self {
            total: events.len(),
            success: count(EventStatus::Success),
            failed: count(EventStatus::Failed),
            pending: count(EventStatus::Pending),
        }
    }
}

/// Subscription lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Paid up and running
    Active,
    /// Not started or paused
    Inactive,
    /// Last payment failed
    PastDue,
    /// Ended
    Canceled,
}

impl SubscriptionStatus {
    /// Wire name (`"active"`, `"past_due"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::PastDue => "past_due",
            Self::Canceled => "canceled",
        }
    }
}

/// The customer's current plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Subscription id (`sub_...`)
    pub id: String,
    /// Lifecycle status
    pub status: SubscriptionStatus,
    /// Display name of the plan
    pub plan_name: String,
    /// Price per period, minor units
    pub amount: i64,
    /// ISO currency code, any case
    pub currency: String,
    /// Period start, epoch millis
    pub current_period_start: i64,
    /// Period end, epoch millis
    pub current_period_end: i64,
    /// Whether the subscription ends when the current period does
    pub cancel_at_period_end: bool,
}

/// Card (or other method) on file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Method type, e.g. `card`
    #[serde(rename = "type")]
    pub kind: String,
    /// Last four digits
    pub last4: String,
    /// Card brand, e.g. `visa`
    pub brand: String,
}

/// Billing profile of the customer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInfo {
    /// Customer id (`cus_...`)
    pub customer_id: String,
    /// Billing e-mail
    pub email: String,
    /// Payment method on file, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

/// Invoice status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Settled
    Paid,
    /// Awaiting payment
    Open,
    /// Voided
    Void,
    /// Written off
    Uncollectible,
}

impl InvoiceStatus {
    /// Wire name (`"paid"`, `"open"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Open => "open",
            Self::Void => "void",
            Self::Uncollectible => "uncollectible",
        }
    }
}

/// A past or pending invoice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Invoice id (`inv_...`)
    pub id: String,
    /// Total, minor units
    pub amount: i64,
    /// ISO currency code, any case
    pub currency: String,
    /// Invoice status
    pub status: InvoiceStatus,
    /// Creation time, epoch millis
    pub created: i64,
    /// Due date, epoch millis
    pub due_date: i64,
    /// Link to the hosted invoice / PDF
    pub invoice_url: String,
}
