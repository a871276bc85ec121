//! Webhook dashboard data: the loaded snapshot and its table rows.

use serde::{Deserialize, Serialize};

use crate::collaborators::{CollaboratorResult, WebhookFeed};
use crate::format::{DisplayFormat, payload_preview};
use crate::i18n::Language;
use crate::load::LoadState;
use crate::status::{event_label, event_tone};
use crate::types::{WebhookEvent, WebhookStats};

/// Dashboard state: loading, loaded snapshot, or failure.
pub type WebhookDashboardState = LoadState<WebhookSnapshot>;

/// Events plus the counts derived from them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookSnapshot {
    /// Events as returned by the feed
    pub events: Vec<WebhookEvent>,
    /// Derived counts
    pub stats: WebhookStats,
}

impl WebhookSnapshot {
    /// Build a snapshot, deriving stats from `events`.
    pub fn new(events: Vec<WebhookEvent>) -> Self {
        let stats = WebhookStats::from_events(&events);
        Self { events, stats }
    }

    /// Query the feed once.
    pub async fn load(feed: &dyn WebhookFeed) -> CollaboratorResult<Self> {
        let events = feed.recent_events().await?;
        Ok(Self::new(events))
    }

    /// Table rows, formatted for display.
    pub fn rows(&self, fmt: &DisplayFormat, lang: Language) -> Vec<EventRow> {
        self.events
            .iter()
            .map(|event| EventRow::new(event, fmt, lang))
            .collect()
    }
}

/// One formatted line of the event table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRow {
    /// Event id, used as row key
    pub id: String,
    /// Event type tag
    pub kind: String,
    /// `DD/MM/YYYY HH:MM`
    pub time: String,
    /// Localized status label
    pub status_label: String,
    /// Badge classes for the status
    pub badge_class: &'static str,
    /// Truncated payload
    pub preview: String,
}

impl EventRow {
    fn new(event: &WebhookEvent, fmt: &DisplayFormat, lang: Language) -> Self {
        let status = event.status.as_str();
        Self {
            id: event.id.clone(),
            kind: event.kind.clone(),
            time: fmt.timestamp(event.created),
            status_label: event_label(status, lang).to_string(),
            badge_class: event_tone(status).badge_class(),
            preview: payload_preview(&event.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::MockWebhookFeed;
    use crate::error::CollaboratorError;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    const NOW: i64 = 1_791_972_300_000;

    struct DownFeed;

    #[async_trait]
    impl WebhookFeed for DownFeed {
        async fn recent_events(&self) -> CollaboratorResult<Vec<WebhookEvent>> {
            Err(CollaboratorError::FeedUnavailable("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn mock_stats() {
        let snapshot = WebhookSnapshot::load(&MockWebhookFeed::at(NOW)).await.unwrap();
        assert_eq!(
            snapshot.stats,
            WebhookStats {
                total: 3,
                success: 2,
                failed: 1,
                pending: 0,
            }
        );
    }

    #[tokio::test]
    async fn mount_sequence_loading_then_ready() {
        let mut state = WebhookDashboardState::default();
        assert!(state.is_loading());

        let outcome = WebhookSnapshot::load(&MockWebhookFeed::at(NOW)).await;
        state = LoadState::settle(outcome, "webhook events");

        assert!(!state.is_loading());
        let snapshot = state.ready().expect("snapshot after load");
        let kinds: Vec<&str> = snapshot.events.iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(
            kinds,
            vec![
                "payment_intent.succeeded",
                "invoice.payment_failed",
                "customer.subscription.updated"
            ]
        );
    }

    #[tokio::test]
    async fn feed_failure_clears_loading_and_keeps_message() {
        let outcome = WebhookSnapshot::load(&DownFeed).await;
        let state = WebhookDashboardState::settle(outcome, "webhook events");

        assert!(!state.is_loading());
        assert!(state.ready().is_none());
        assert!(state.failure().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn rows_are_formatted_in_hebrew_israel() {
        let snapshot = WebhookSnapshot::load(&MockWebhookFeed::at(NOW)).await.unwrap();
        let rows = snapshot.rows(&DisplayFormat::default(), Language::Hebrew);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].time, "14/10/2026 12:05");
        assert_eq!(rows[0].status_label, "הצליח");
        assert_eq!(rows[1].status_label, "נכשל");
        assert_eq!(rows[1].badge_class, "text-red-600 bg-red-100");
        assert!(rows[2].preview.ends_with("..."));
    }

    #[tokio::test]
    async fn english_labels_keep_hebrew_time_format() {
        let snapshot = WebhookSnapshot::load(&MockWebhookFeed::at(NOW)).await.unwrap();
        let en = snapshot.rows(&DisplayFormat::default(), Language::English);
        let he = snapshot.rows(&DisplayFormat::default(), Language::Hebrew);

        assert_eq!(en[0].status_label, "Succeeded");
        assert_eq!(en[0].time, he[0].time);
    }
}
