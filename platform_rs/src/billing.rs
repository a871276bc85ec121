//! Billing widget data and the cancel-subscription dialog.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::collaborators::{BillingService, CollaboratorResult};
use crate::error::CollaboratorError;
use crate::format::{DisplayFormat, format_amount};
use crate::i18n::Language;
use crate::load::LoadState;
use crate::status::{billing_label, billing_tone};
use crate::types::{BillingInfo, Invoice, Subscription};

/// Widget state: loading, loaded snapshot, or failure.
pub type BillingWidgetState = LoadState<BillingSnapshot>;

/// Everything the billing widget shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingSnapshot {
    /// Current subscription
    pub subscription: Subscription,
    /// Customer profile
    pub billing_info: BillingInfo,
    /// Recent invoices
    pub invoices: Vec<Invoice>,
}

impl BillingSnapshot {
    /// Fetch the three records concurrently; any failure fails the load.
    pub async fn load(service: &dyn BillingService) -> CollaboratorResult<Self> {
        let (subscription, billing_info, invoices) = futures::try_join!(
            service.subscription(),
            service.billing_info(),
            service.invoices()
        )?;

        Ok(Self {
            subscription,
            billing_info,
            invoices,
        })
    }

    /// The cancel button is hidden once cancellation is already scheduled.
    pub fn can_cancel(&self) -> bool {
        !self.subscription.cancel_at_period_end
    }

    /// Whether the "ends at period end" warning shows.
    pub fn shows_period_end_warning(&self) -> bool {
        self.subscription.cancel_at_period_end
    }

    /// Subscription price, e.g. `29.99 $`.
    pub fn plan_price(&self) -> String {
        format_amount(self.subscription.amount, &self.subscription.currency)
    }

    /// Subscription status label and badge classes.
    pub fn subscription_badge(&self, lang: Language) -> (String, &'static str) {
        let status = self.subscription.status.as_str();
        (
            billing_label(status, lang).to_string(),
            billing_tone(status).badge_class(),
        )
    }

    /// Invoice table rows, formatted for display.
    pub fn invoice_rows(&self, fmt: &DisplayFormat, lang: Language) -> Vec<InvoiceRow> {
        self.invoices
            .iter()
            .map(|invoice| {
                let status = invoice.status.as_str();
                InvoiceRow {
                    id: invoice.id.clone(),
                    date: fmt.date(invoice.created),
                    amount: format_amount(invoice.amount, &invoice.currency),
                    status_label: billing_label(status, lang).to_string(),
                    badge_class: billing_tone(status).badge_class(),
                    url: invoice.invoice_url.clone(),
                }
            })
            .collect()
    }
}

/// One formatted line of the invoice table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvoiceRow {
    /// Invoice id, used as row key
    pub id: String,
    /// Long he-IL date
    pub date: String,
    /// Formatted amount
    pub amount: String,
    /// Localized status label
    pub status_label: String,
    /// Badge classes for the status
    pub badge_class: &'static str,
    /// Hosted invoice link
    pub url: String,
}

/// Visibility and outcome of the cancel-subscription confirmation dialog.
///
/// Confirming only notifies the billing service. Neither a successful nor a
/// failed request touches the loaded [`Subscription`].
///
/// Each confirm hands out a ticket. Dismissing abandons the outstanding
/// request, so its late answer can no longer close or fail a reopened dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CancelDialog {
    open: bool,
    pending: bool,
    request: u64,
    error: Option<String>,
}

impl CancelDialog {
    /// Show the dialog.
    pub fn open(&mut self) {
        self.open = true;
        self.error = None;
    }

    /// "Cancel" button: close without doing anything.
    pub fn dismiss(&mut self) {
        self.open = false;
        self.pending = false;
        self.error = None;
    }

    /// Confirm pressed. Returns the ticket of the new request, or `None`
    /// while one is already in flight.
    pub fn begin_confirm(&mut self) -> Option<u64> {
        if self.pending {
            return None;
        }
        self.request += 1;
        self.pending = true;
        self.error = None;
        Some(self.request)
    }

    /// Record the billing service's answer for `ticket`. Success closes the
    /// dialog, failure keeps it open with the error. Answers to abandoned
    /// requests are ignored; returns whether the outcome was applied.
    pub fn settle(&mut self, ticket: u64, outcome: Result<(), CollaboratorError>) -> bool {
        if !self.pending || ticket != self.request {
            debug!("Ignoring answer to abandoned cancellation request {ticket}");
            return false;
        }
        self.pending = false;
        match outcome {
            Ok(()) => {
                info!("Subscription cancellation requested");
                self.open = false;
                self.error = None;
            }
            Err(e) => {
                error!("Failed to cancel subscription: {e}");
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Whether the dialog is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a confirm request is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Last cancellation failure.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::MockBillingService;
    use crate::types::InvoiceStatus;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    const NOW: i64 = 1_791_972_300_000;

    /// Billing backend that is reachable for reads but rejects every action.
    struct ReadOnlyBilling(MockBillingService);

    #[async_trait]
    impl BillingService for ReadOnlyBilling {
        async fn subscription(&self) -> CollaboratorResult<Subscription> {
            self.0.subscription().await
        }
        async fn billing_info(&self) -> CollaboratorResult<BillingInfo> {
            self.0.billing_info().await
        }
        async fn invoices(&self) -> CollaboratorResult<Vec<Invoice>> {
            Err(CollaboratorError::Billing("invoices unavailable".into()))
        }
        async fn cancel_subscription(&self, _subscription_id: &str) -> CollaboratorResult<()> {
            Err(CollaboratorError::Rejected("cancellation locked".into()))
        }
        async fn create_portal_session(&self, _customer_id: &str) -> CollaboratorResult<String> {
            Err(CollaboratorError::Billing("portal down".into()))
        }
    }

    async fn snapshot() -> BillingSnapshot {
        BillingSnapshot::load(&MockBillingService::at(NOW)).await.unwrap()
    }

    #[tokio::test]
    async fn loads_all_three_records() {
        let snapshot = snapshot().await;
        assert_eq!(snapshot.subscription.id, "sub_1234567890");
        assert_eq!(snapshot.billing_info.email, "user@example.com");
        assert_eq!(snapshot.invoices.len(), 2);
        assert!(snapshot.can_cancel());
        assert!(!snapshot.shows_period_end_warning());
    }

    #[tokio::test]
    async fn any_failing_record_fails_the_load() {
        let outcome = BillingSnapshot::load(&ReadOnlyBilling(MockBillingService::at(NOW))).await;
        let state = BillingWidgetState::settle(outcome, "billing data");
        assert!(!state.is_loading());
        assert!(state.failure().unwrap().contains("invoices unavailable"));
    }

    #[tokio::test]
    async fn price_and_badge() {
        let snapshot = snapshot().await;
        let price = snapshot.plan_price();
        assert!(price.contains("29.99") && price.contains('$'), "{price}");

        let (label, class) = snapshot.subscription_badge(Language::Hebrew);
        assert_eq!(label, "פעיל");
        assert_eq!(class, "text-green-600 bg-green-100");
    }

    #[tokio::test]
    async fn invoice_rows() {
        let mut snapshot = snapshot().await;
        snapshot.invoices[1].status = InvoiceStatus::Void;

        let rows = snapshot.invoice_rows(&DisplayFormat::default(), Language::Hebrew);
        assert_eq!(rows[0].id, "inv_001");
        assert_eq!(rows[0].status_label, "שולם");
        assert_eq!(rows[0].amount, "29.99\u{a0}$");
        assert_eq!(rows[0].url, "#");
        assert_eq!(rows[1].status_label, "void");
        assert_eq!(rows[1].badge_class, "text-gray-600 bg-gray-100");
    }

    #[tokio::test]
    async fn scheduled_cancellation_hides_cancel_button() {
        let mut snapshot = snapshot().await;
        snapshot.subscription.cancel_at_period_end = true;
        assert!(!snapshot.can_cancel());
        assert!(snapshot.shows_period_end_warning());
    }

    #[tokio::test]
    async fn dismissing_dialog_leaves_subscription_untouched() {
        let snapshot = snapshot().await;
        let before = snapshot.subscription.clone();
        let mut dialog = CancelDialog::default();

        dialog.open();
        assert!(dialog.is_open());
        dialog.dismiss();

        assert!(!dialog.is_open());
        assert_eq!(snapshot.subscription, before);
    }

    #[tokio::test]
    async fn confirmed_cancellation_closes_dialog_without_mutating() {
        let service = MockBillingService::at(NOW);
        let snapshot = BillingSnapshot::load(&service).await.unwrap();
        let mut dialog = CancelDialog::default();

        dialog.open();
        let ticket = dialog.begin_confirm().unwrap();
        assert!(dialog.is_pending());
        assert!(dialog.settle(ticket, service.cancel_subscription(&snapshot.subscription.id).await));

        assert!(!dialog.is_open());
        assert!(!dialog.is_pending());
        assert!(dialog.error().is_none());
        assert!(!snapshot.subscription.cancel_at_period_end);
    }

    #[tokio::test]
    async fn failed_cancellation_keeps_dialog_open() {
        let service = ReadOnlyBilling(MockBillingService::at(NOW));
        let mut dialog = CancelDialog::default();

        dialog.open();
        let ticket = dialog.begin_confirm().unwrap();
        dialog.settle(ticket, service.cancel_subscription("sub_1234567890").await);

        assert!(dialog.is_open());
        assert!(!dialog.is_pending());
        assert_eq!(dialog.error(), Some("Request rejected: cancellation locked"));

        dialog.open();
        assert!(dialog.error().is_none());
    }

    #[test]
    fn confirm_is_single_flight() {
        let mut dialog = CancelDialog::default();
        dialog.open();

        let first = dialog.begin_confirm();
        assert!(first.is_some());
        assert_eq!(dialog.begin_confirm(), None);
    }

    #[test]
    fn abandoned_request_does_not_close_reopened_dialog() {
        let mut dialog = CancelDialog::default();

        dialog.open();
        let stale = dialog.begin_confirm().unwrap();
        dialog.dismiss();
        dialog.open();

        assert!(!dialog.settle(stale, Ok(())));
        assert!(dialog.is_open());
        assert!(!dialog.is_pending());
        assert!(dialog.error().is_none());

        // A fresh confirm still goes through
        let fresh = dialog.begin_confirm().unwrap();
        assert_ne!(fresh, stale);
        assert!(!dialog.settle(stale, Err(CollaboratorError::Rejected("late".into()))));
        assert!(dialog.is_pending());
        assert!(dialog.settle(fresh, Ok(())));
        assert!(!dialog.is_open());
    }

    #[tokio::test]
    async fn portal_failure_is_reported() {
        let service = ReadOnlyBilling(MockBillingService::at(NOW));
        let outcome = service.create_portal_session("cus_1234567890").await;

        assert_eq!(outcome, Err(CollaboratorError::Billing("portal down".into())));
        assert_eq!(
            outcome.unwrap_err().to_string(),
            "Billing service error: portal down"
        );
    }
}
