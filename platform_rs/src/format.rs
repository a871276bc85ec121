//! he-IL formatting of timestamps, dates and amounts.
//!
//! Both dashboards format in the Hebrew-Israel convention whatever language
//! the surrounding UI is in. Only the wall-clock zone is configurable.

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use serde_json::Value as JsonValue;

use crate::error::ConfigError;

/// Default wall-clock zone for displayed times.
pub const DEFAULT_TIMEZONE: &str = "Asia/Jerusalem";

/// Characters of the pretty-printed payload kept in the event table.
pub const PAYLOAD_PREVIEW_CHARS: usize = 50;

const HEBREW_MONTHS: [&str; 12] = [
    "בינואר",
    "בפברואר",
    "במרץ",
    "באפריל",
    "במאי",
    "ביוני",
    "ביולי",
    "באוגוסט",
    "בספטמבר",
    "באוקטובר",
    "בנובמבר",
    "בדצמבר",
];

/// Shown for timestamps chrono cannot represent.
const INVALID_TIME: &str = "-";

/// Formatter bound to a display timezone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayFormat {
    tz: Tz,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            tz: chrono_tz::Asia::Jerusalem,
        }
    }
}

impl DisplayFormat {
    /// Formatter for a specific zone.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Parse an IANA zone name, e.g. `"Europe/Madrid"`.
    pub fn from_timezone_name(name: &str) -> Result<Self, ConfigError> {
        name.parse::<Tz>()
            .map(Self::new)
            .map_err(|_| ConfigError::UnknownTimezone(name.to_string()))
    }

    /// Zone used for display.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Event time as `DD/MM/YYYY HH:MM`.
    pub fn timestamp(&self, millis: i64) -> String {
        match DateTime::<Utc>::from_timestamp_millis(millis) {
            Some(utc) => utc.with_timezone(&self.tz).format("%d/%m/%Y %H:%M").to_string(),
            None => INVALID_TIME.to_string(),
        }
    }

    /// Long date, e.g. `14 באוקטובר 2026`.
    pub fn date(&self, millis: i64) -> String {
        let Some(utc) = DateTime::<Utc>::from_timestamp_millis(millis) else {
            return INVALID_TIME.to_string();
        };
        let local = utc.with_timezone(&self.tz);
        let month = HEBREW_MONTHS[local.month0() as usize];
        format!("{} {} {}", local.day(), month, local.year())
    }
}

/// Amount in minor units as a he-IL currency string, e.g. `29.99 $`.
///
/// Always two fraction digits. The code is uppercased; codes without a known
/// symbol are printed as the code.
pub fn format_amount(minor_units: i64, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let symbol = currency_symbol(&code).unwrap_or(code.as_str());

    let sign = if minor_units < 0 { "-" } else { "" };
    let abs = minor_units.unsigned_abs();
    let major = group_thousands(abs / 100);
    let cents = abs % 100;

    format!("{sign}{major}.{cents:02}\u{a0}{symbol}")
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "ILS" => Some("₪"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Pretty-printed payload cut to [`PAYLOAD_PREVIEW_CHARS`] characters, then `...`.
pub fn payload_preview(data: &JsonValue) -> String {
    let pretty = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
    let mut preview: String = pretty.chars().take(PAYLOAD_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Card number with everything but the last four digits hidden.
pub fn masked_card(last4: &str) -> String {
    format!("•••• •••• •••• {last4}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // 2026-10-14T10:05:00Z
    const OCT_14_2026: i64 = 1_791_972_300_000;

    #[test]
    fn amount_in_minor_units() {
        let formatted = format_amount(2999, "usd");
        assert!(formatted.contains("29.99"), "{formatted}");
        assert!(formatted.contains('$'), "{formatted}");
        assert_eq!(formatted, "29.99\u{a0}$");
    }

    #[test]
    fn amount_grouping_and_sign() {
        assert_eq!(format_amount(123_456_789, "ils"), "1,234,567.89\u{a0}₪");
        assert_eq!(format_amount(-500, "EUR"), "-5.00\u{a0}€");
        assert_eq!(format_amount(0, "usd"), "0.00\u{a0}$");
        assert_eq!(format_amount(7, "usd"), "0.07\u{a0}$");
    }

    #[test]
    fn unknown_currency_shows_code() {
        assert_eq!(format_amount(1000, "chf"), "10.00\u{a0}CHF");
    }

    #[test]
    fn timestamp_in_jerusalem() {
        // IDT is UTC+3 in October
        let fmt = DisplayFormat::default();
        assert_eq!(fmt.timestamp(OCT_14_2026), "14/10/2026 13:05");
    }

    #[test]
    fn timestamp_in_other_zone() {
        let fmt = DisplayFormat::from_timezone_name("UTC").unwrap();
        assert_eq!(fmt.timestamp(OCT_14_2026), "14/10/2026 10:05");
    }

    #[test]
    fn unknown_zone_is_rejected() {
        let err = DisplayFormat::from_timezone_name("Mars/Olympus").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTimezone(name) if name == "Mars/Olympus"));
    }

    #[test]
    fn long_hebrew_date() {
        let fmt = DisplayFormat::default();
        assert_eq!(fmt.date(OCT_14_2026), "14 באוקטובר 2026");
    }

    #[test]
    fn out_of_range_time() {
        let fmt = DisplayFormat::default();
        assert_eq!(fmt.timestamp(i64::MAX), "-");
        assert_eq!(fmt.date(i64::MIN), "-");
    }

    #[test]
    fn payload_preview_is_cut_to_fifty_chars() {
        let preview = payload_preview(&json!({
            "customer": "cus_1234567890",
            "description": "a payload long enough to be cut"
        }));
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PAYLOAD_PREVIEW_CHARS + 3);
        assert!(preview.starts_with("{\n  \"customer\""));
    }

    #[test]
    fn short_payload_still_gets_ellipsis() {
        assert_eq!(payload_preview(&json!({})), "{}...");
    }

    #[test]
    fn masks_card() {
        assert_eq!(masked_card("4242"), "•••• •••• •••• 4242");
    }
}
