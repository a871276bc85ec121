//! Status -> badge tone and status -> label lookup tables.
//!
//! Lookups take the raw status string so they stay total: a status the
//! tables don't know (a new Stripe state, a typo in a fixture) gets the
//! neutral tone and, for labels, is shown as-is.

use crate::i18n::Language;

/// Color family of a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Red,
    Yellow,
    Blue,
    /// Fallback for unknown statuses
    Neutral,
}

impl Tone {
    /// Tailwind classes for a badge of this tone.
    pub fn badge_class(self) -> &'static str {
        match self {
            Tone::Green => "text-green-600 bg-green-100",
            Tone::Red => "text-red-600 bg-red-100",
            Tone::Yellow => "text-yellow-600 bg-yellow-100",
            Tone::Blue => "text-blue-600 bg-blue-100",
            Tone::Neutral => "text-gray-600 bg-gray-100",
        }
    }
}

/// Badge tone of a webhook event status.
pub fn event_tone(status: &str) -> Tone {
    match status {
        "success" => Tone::Green,
        "failed" => Tone::Red,
        "pending" => Tone::Yellow,
        _ => Tone::Neutral,
    }
}

/// Label of a webhook event status; unknown statuses come back unchanged.
pub fn event_label(status: &str, lang: Language) -> &str {
    match status {
        "success" => lang.pick("Succeeded", "הצליח"),
        "failed" => lang.pick("Failed", "נכשל"),
        "pending" => lang.pick("Pending", "ממתין"),
        other => other,
    }
}

/// Badge tone of a subscription or invoice status.
pub fn billing_tone(status: &str) -> Tone {
    match status {
        "active" | "paid" => Tone::Green,
        "past_due" => Tone::Yellow,
        "canceled" => Tone::Red,
        "open" => Tone::Blue,
        _ => Tone::Neutral,
    }
}

/// Label of a subscription or invoice status; unknown statuses come back unchanged.
pub fn billing_label(status: &str, lang: Language) -> &str {
    match status {
        "active" => lang.pick("Active", "פעיל"),
        "past_due" => lang.pick("Past due", "פגול"),
        "canceled" => lang.pick("Canceled", "מבוטל"),
        "paid" => lang.pick("Paid", "שולם"),
        "open" => lang.pick("Open", "פתוח"),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_tones() {
        assert_eq!(event_tone("success"), Tone::Green);
        assert_eq!(event_tone("failed"), Tone::Red);
        assert_eq!(event_tone("pending"), Tone::Yellow);
        assert_eq!(event_tone("retrying"), Tone::Neutral);
        assert_eq!(event_tone(""), Tone::Neutral);
        assert_eq!(event_tone("success").badge_class(), "text-green-600 bg-green-100");
    }

    #[test]
    fn event_labels_fall_back_to_raw_status() {
        assert_eq!(event_label("success", Language::Hebrew), "הצליח");
        assert_eq!(event_label("failed", Language::Hebrew), "נכשל");
        assert_eq!(event_label("pending", Language::Hebrew), "ממתין");
        assert_eq!(event_label("pending", Language::English), "Pending");
        assert_eq!(event_label("retrying", Language::Hebrew), "retrying");
    }

    #[test]
    fn billing_tones_cover_subscription_and_invoice_statuses() {
        assert_eq!(billing_tone("active"), Tone::Green);
        assert_eq!(billing_tone("paid"), Tone::Green);
        assert_eq!(billing_tone("past_due"), Tone::Yellow);
        assert_eq!(billing_tone("canceled"), Tone::Red);
        assert_eq!(billing_tone("open"), Tone::Blue);
        for unmapped in ["inactive", "void", "uncollectible", "trialing"] {
            assert_eq!(billing_tone(unmapped), Tone::Neutral, "{unmapped}");
        }
        assert_eq!(Tone::Neutral.badge_class(), "text-gray-600 bg-gray-100");
    }

    #[test]
    fn billing_labels() {
        assert_eq!(billing_label("active", Language::Hebrew), "פעיל");
        assert_eq!(billing_label("past_due", Language::Hebrew), "פגול");
        assert_eq!(billing_label("canceled", Language::Hebrew), "מבוטל");
        assert_eq!(billing_label("paid", Language::Hebrew), "שולם");
        assert_eq!(billing_label("open", Language::English), "Open");
        assert_eq!(billing_label("void", Language::Hebrew), "void");
        assert_eq!(billing_label("uncollectible", Language::English), "uncollectible");
    }
}
