//! External collaborator contracts and the mock implementations that stand in
//! for them.
//!
//! The dashboards only talk to these traits. Swapping [`MockWebhookFeed`] or
//! [`MockBillingService`] for an HTTP-backed implementation does not touch
//! the state machines or the components.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::error::CollaboratorError;
use crate::types::{
    BillingInfo, EventStatus, Invoice, InvoiceStatus, PaymentMethod, Subscription,
    SubscriptionStatus, WebhookEvent,
};

/// Collaborator results.
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

/// Shared handle to a webhook feed.
pub type SharedWebhookFeed = Arc<dyn WebhookFeed>;

/// Shared handle to a billing service.
pub type SharedBillingService = Arc<dyn BillingService>;

/// Customer portal used when none is configured.
pub const DEFAULT_PORTAL_URL: &str = "https://billing.stripe.com/p/login/test_123";

const HOUR_MS: i64 = 60 * 60 * 1000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Source of webhook events for the event log.
#[async_trait]
pub trait WebhookFeed: Send + Sync {
    /// Most recent events, newest first.
    async fn recent_events(&self) -> CollaboratorResult<Vec<WebhookEvent>>;
}

/// Billing backend: subscription, invoices and the actions on them.
#[async_trait]
pub trait BillingService: Send + Sync {
    /// The customer's current subscription.
    async fn subscription(&self) -> CollaboratorResult<Subscription>;

    /// Customer billing profile.
    async fn billing_info(&self) -> CollaboratorResult<BillingInfo>;

    /// Recent invoices, newest first.
    async fn invoices(&self) -> CollaboratorResult<Vec<Invoice>>;

    /// Ask the backend to cancel `subscription_id` at period end.
    async fn cancel_subscription(&self, subscription_id: &str) -> CollaboratorResult<()>;

    /// Create a customer portal session and return its URL.
    async fn create_portal_session(&self, customer_id: &str) -> CollaboratorResult<String>;
}

/// Current wall-clock time in epoch millis.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Webhook feed serving three fixed events.
#[derive(Clone, Debug)]
pub struct MockWebhookFeed {
    now: i64,
}

impl Default for MockWebhookFeed {
    fn default() -> Self {
        Self::at(now_millis())
    }
}

impl MockWebhookFeed {
    /// Feed whose events are timestamped relative to `now` (epoch millis).
    pub fn at(now: i64) -> Self {
        Self { now }
    }

    /// The fixed events.
    pub fn events(&self) -> Vec<WebhookEvent> {
        vec![
            WebhookEvent {
                id: "evt_1".into(),
                kind: "payment_intent.succeeded".into(),
                created: self.now - HOUR_MS,
                data: json!({ "amount": 2999, "currency": "usd" }),
                status: EventStatus::Success,
            },
            WebhookEvent {
                id: "evt_2".into(),
                kind: "invoice.payment_failed".into(),
                created: self.now - 2 * HOUR_MS,
                data: json!({ "amount": 1999, "currency": "usd" }),
                status: EventStatus::Failed,
            },
            WebhookEvent {
                id: "evt_3".into(),
                kind: "customer.subscription.updated".into(),
                created: self.now - 3 * HOUR_MS,
                data: json!({ "plan": "pro", "status": "active" }),
                status: EventStatus::Success,
            },
        ]
    }
}

#[async_trait]
impl WebhookFeed for MockWebhookFeed {
    async fn recent_events(&self) -> CollaboratorResult<Vec<WebhookEvent>> {
        Ok(self.events())
    }
}

/// Billing service serving one subscription, one profile and two invoices.
#[derive(Clone, Debug)]
pub struct MockBillingService {
    now: i64,
    portal_url: String,
}

impl Default for MockBillingService {
    fn default() -> Self {
        Self::at(now_millis())
    }
}

impl MockBillingService {
    /// Service whose records are dated relative to `now` (epoch millis).
    pub fn at(now: i64) -> Self {
        Self {
            now,
            portal_url: DEFAULT_PORTAL_URL.to_string(),
        }
    }

    /// Use `url` as the customer portal.
    pub fn with_portal_url(mut self, url: impl Into<String>) -> Self {
        self.portal_url = url.into();
        self
    }

    fn mock_subscription(&self) -> Subscription {
        Subscription {
            id: "sub_1234567890".into(),
            status: SubscriptionStatus::Active,
            plan_name: "Pro Plan".into(),
            amount: 2999,
            currency: "usd".into(),
            current_period_start: self.now - 15 * DAY_MS,
            current_period_end: self.now + 15 * DAY_MS,
            cancel_at_period_end: false,
        }
    }

    fn mock_billing_info(&self) -> BillingInfo {
        BillingInfo {
            customer_id: "cus_1234567890".into(),
            email: "user@example.com".into(),
            payment_method: Some(PaymentMethod {
                kind: "card".into(),
                last4: "4242".into(),
                brand: "visa".into(),
            }),
        }
    }

    fn mock_invoices(&self) -> Vec<Invoice> {
        let invoice = |id: &str, created_days_ago: i64, due_days_ago: i64| Invoice {
            id: id.into(),
            amount: 2999,
            currency: "usd".into(),
            status: InvoiceStatus::Paid,
            created: self.now - created_days_ago * DAY_MS,
            due_date: self.now - due_days_ago * DAY_MS,
            invoice_url: "#".into(),
        };

        vec![invoice("inv_001", 30, 25), invoice("inv_002", 60, 55)]
    }
}

#[async_trait]
impl BillingService for MockBillingService {
    async fn subscription(&self) -> CollaboratorResult<Subscription> {
        Ok(self.mock_subscription())
    }

    async fn billing_info(&self) -> CollaboratorResult<BillingInfo> {
        Ok(self.mock_billing_info())
    }

    async fn invoices(&self) -> CollaboratorResult<Vec<Invoice>> {
        Ok(self.mock_invoices())
    }

    async fn cancel_subscription(&self, subscription_id: &str) -> CollaboratorResult<()> {
        info!("Canceling subscription {subscription_id}...");
        Ok(())
    }

    async fn create_portal_session(&self, customer_id: &str) -> CollaboratorResult<String> {
        info!("Opening billing portal for {customer_id}");
        Ok(self.portal_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_791_972_300_000;

    #[tokio::test]
    async fn mock_feed_serves_three_events() {
        let events = MockWebhookFeed::at(NOW).recent_events().await.unwrap();
        let kinds: Vec<&str> = events.iter().map(|e| e.kind.as_str()).collect();

        assert_eq!(
            kinds,
            vec![
                "payment_intent.succeeded",
                "invoice.payment_failed",
                "customer.subscription.updated"
            ]
        );
        assert_eq!(events[0].created, NOW - HOUR_MS);
        assert_eq!(events[2].created, NOW - 3 * HOUR_MS);
        assert_eq!(events[1].data["amount"], 1999);
    }

    #[tokio::test]
    async fn mock_billing_records() {
        let service = MockBillingService::at(NOW);

        let sub = service.subscription().await.unwrap();
        assert_eq!(sub.plan_name, "Pro Plan");
        assert_eq!(sub.current_period_end - sub.current_period_start, 30 * DAY_MS);
        assert!(!sub.cancel_at_period_end);

        let info = service.billing_info().await.unwrap();
        assert_eq!(info.payment_method.unwrap().last4, "4242");

        let invoices = service.invoices().await.unwrap();
        assert_eq!(invoices.len(), 2);
        assert!(invoices.iter().all(|i| i.status == InvoiceStatus::Paid));
        assert_eq!(invoices[1].due_date, NOW - 55 * DAY_MS);
    }

    #[tokio::test]
    async fn portal_url_is_configurable() {
        let service = MockBillingService::at(NOW).with_portal_url("https://portal.test/s/1");
        let url = service.create_portal_session("cus_1").await.unwrap();
        assert_eq!(url, "https://portal.test/s/1");

        let default_url = MockBillingService::at(NOW)
            .create_portal_session("cus_1")
            .await
            .unwrap();
        assert_eq!(default_url, DEFAULT_PORTAL_URL);
    }

    #[tokio::test]
    async fn mock_cancel_succeeds() {
        let service = MockBillingService::at(NOW);
        assert!(service.cancel_subscription("sub_1234567890").await.is_ok());
    }
}
