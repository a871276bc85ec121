//! English / Hebrew string table and the landing page language toggle.
//!
//! Every user-visible string goes through [`Text::in_lang`], so switching the
//! language is a pure function of the current [`Language`].

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// One of the two supported locales.
///
/// Serializes as its code. Deserializing accepts whatever [`FromStr`] does,
/// so config files and the command line agree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    /// English, left-to-right
    #[default]
    #[serde(rename = "en")]
    English,
    /// Hebrew, right-to-left
    #[serde(rename = "he")]
    Hebrew,
}

impl Language {
    /// Value of the `dir` attribute: `"ltr"` or `"rtl"`.
    pub fn dir(self) -> &'static str {
        match self {
            Self::English => "ltr",
            Self::Hebrew => "rtl",
        }
    }

    /// `lang` attribute value.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hebrew => "he",
        }
    }

    /// Whether text runs right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Hebrew)
    }

    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Self::English => Self::Hebrew,
            Self::Hebrew => Self::English,
        }
    }

    /// Name of this language written in itself (`"English"`, `"עברית"`).
    pub fn native_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hebrew => "עברית",
        }
    }

    /// Pick between an English and a localized (Hebrew) variant.
    pub fn pick<'a>(self, english: &'a str, hebrew: &'a str) -> &'a str {
        match self {
            Self::English => english,
            Self::Hebrew => hebrew,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "he" | "hebrew" | "iw" => Ok(Self::Hebrew),
            other => Err(ConfigError::UnknownLanguage(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Keys of the fixed string table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Text {
    // Landing
    LandingTitle,
    LandingSubtitle,
    GetStarted,

    // Shared
    Status,
    Retry,

    // Webhook dashboard
    WebhookLoading,
    WebhookHeader,
    WebhookDescription,
    TotalEvents,
    Succeeded,
    Failures,
    Waiting,
    RecentEvents,
    EventType,
    Time,
    Data,
    RefreshData,
    WebhookLoadFailed,

    // Billing widget
    BillingLoading,
    BillingHeader,
    BillingDescription,
    CurrentSubscription,
    PerMonth,
    PeriodStart,
    PeriodEnd,
    CancelAtPeriodEndWarning,
    UpdatePaymentMethod,
    CancelSubscription,
    PaymentMethod,
    RecentInvoices,
    Date,
    Amount,
    Actions,
    DownloadPdf,
    CancelDialogBody,
    KeepSubscription,
    ConfirmCancel,
    BillingLoadFailed,
    CancelFailed,
    PortalFailed,
}

impl Text {
    /// Every key, in declaration order.
    pub const ALL: &'static [Text] = &[
        Text::LandingTitle,
        Text::LandingSubtitle,
        Text::GetStarted,
        Text::Status,
        Text::Retry,
        Text::WebhookLoading,
        Text::WebhookHeader,
        Text::WebhookDescription,
        Text::TotalEvents,
        Text::Succeeded,
        Text::Failures,
        Text::Waiting,
        Text::RecentEvents,
        Text::EventType,
        Text::Time,
        Text::Data,
        Text::RefreshData,
        Text::WebhookLoadFailed,
        Text::BillingLoading,
        Text::BillingHeader,
        Text::BillingDescription,
        Text::CurrentSubscription,
        Text::PerMonth,
        Text::PeriodStart,
        Text::PeriodEnd,
        Text::CancelAtPeriodEndWarning,
        Text::UpdatePaymentMethod,
        Text::CancelSubscription,
        Text::PaymentMethod,
        Text::RecentInvoices,
        Text::Date,
        Text::Amount,
        Text::Actions,
        Text::DownloadPdf,
        Text::CancelDialogBody,
        Text::KeepSubscription,
        Text::ConfirmCancel,
        Text::BillingLoadFailed,
        Text::CancelFailed,
        Text::PortalFailed,
    ];

    /// The string for this key in `lang`.
    pub fn in_lang(self, lang: Language) -> &'static str {
        let (en, he) = self.pair();
        lang.pick(en, he)
    }

    fn pair(self) -> (&'static str, &'static str) {
        match self {
            Text::LandingTitle => ("AI SaaS Platform", "פלטפורמת AI SaaS"),
            Text::LandingSubtitle => (
                "Complete AI-powered SaaS solution is ready!",
                "פתרון SaaS מושלם מבוסס AI מוכן לשימוש!",
            ),
            Text::GetStarted => ("Get Started", "בואו נתחיל"),

            Text::Status => ("Status", "סטטוס"),
            Text::Retry => ("Try again", "נסה שוב"),

            Text::WebhookLoading => ("Loading data...", "טוען נתונים..."),
            Text::WebhookHeader => ("Webhook Dashboard", "דשבורד Webhook"),
            Text::WebhookDescription => (
                "Track webhook events and their processing status",
                "מעקב אחר אירועי webhook ומצב העיבוד שלהם",
            ),
            Text::TotalEvents => ("Total events", "סה\"כ אירועים"),
            Text::Succeeded => ("Succeeded", "הצלחות"),
            Text::Failures => ("Failed", "כשלונות"),
            Text::Waiting => ("Pending", "ממתינים"),
            Text::RecentEvents => ("Recent events", "אירועים אחרונים"),
            Text::EventType => ("Event type", "סוג אירוע"),
            Text::Time => ("Time", "זמן"),
            Text::Data => ("Data", "נתונים"),
            Text::RefreshData => ("Refresh data", "רענן נתונים"),
            Text::WebhookLoadFailed => (
                "Could not load webhook events.",
                "טעינת אירועי ה-webhook נכשלה.",
            ),

            Text::BillingLoading => ("Loading billing data...", "טוען נתוני חיוב..."),
            Text::BillingHeader => (
                "Billing & Subscriptions",
                "ניהול חיוב ומנויים",
            ),
            Text::BillingDescription => (
                "Manage your subscription, payments and billing details",
                "נהל את המנוי שלך, תשלומים ופרטי חיוב",
            ),
            Text::CurrentSubscription => ("Current subscription", "מנוי נוכחי"),
            Text::PerMonth => ("/ month", "/ חודש"),
            Text::PeriodStart => ("Period start", "תחילת תקופה"),
            Text::PeriodEnd => ("Period end", "סוף תקופה"),
            Text::CancelAtPeriodEndWarning => (
                "⚠️ The subscription will be canceled at the end of the current period",
                "⚠️ המנוי יבוטל בסוף התקופה הנוכחית",
            ),
            Text::UpdatePaymentMethod => ("Update payment method", "עדכן אמצעי תשלום"),
            Text::CancelSubscription => ("Cancel subscription", "בטל מנוי"),
            Text::PaymentMethod => ("Payment method", "אמצעי תשלום"),
            Text::RecentInvoices => ("Recent invoices", "חשבוניות אחרונות"),
            Text::Date => ("Date", "תאריך"),
            Text::Amount => ("Amount", "סכום"),
            Text::Actions => ("Actions", "פעולות"),
            Text::DownloadPdf => ("Download PDF", "הורד PDF"),
            Text::CancelDialogBody => (
                "Are you sure you want to cancel your subscription? You can keep using the service until the end of the current period.",
                "האם אתה בטוח שברצונך לבטל את המנוי? תוכל להמשיך להשתמש בשירות עד סוף התקופה הנוכחית.",
            ),
            Text::KeepSubscription => ("Cancel", "ביטול"),
            Text::ConfirmCancel => ("Yes, cancel subscription", "כן, בטל מנוי"),
            Text::BillingLoadFailed => (
                "Could not load billing data.",
                "טעינת נתוני החיוב נכשלה.",
            ),
            Text::CancelFailed => (
                "Cancellation request failed. Please try again.",
                "בקשת הביטול נכשלה. נסה שוב.",
            ),
            Text::PortalFailed => (
                "Could not open the billing portal.",
                "לא ניתן לפתוח את פורטל החיוב.",
            ),
        }
    }
}

/// Language toggle state of the landing page.
///
/// A single flag, `false` = English (LTR), `true` = Hebrew (RTL). Everything
/// that mirrors with the language reads from here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LanguageToggle {
    hebrew: bool,
}

impl LanguageToggle {
    /// Toggle starting in `lang`.
    pub fn starting_in(lang: Language) -> Self {
        Self {
            hebrew: lang == Language::Hebrew,
        }
    }

    /// Flip the flag.
    pub fn toggle(&mut self) {
        self.hebrew = !self.hebrew;
    }

    /// Raw flag.
    pub fn is_hebrew(self) -> bool {
        self.hebrew
    }

    /// Active language.
    pub fn language(self) -> Language {
        if self.hebrew {
            Language::Hebrew
        } else {
            Language::English
        }
    }

    /// `dir` attribute value.
    pub fn dir(self) -> &'static str {
        self.language().dir()
    }

    /// Caption of the toggle button: the language a click switches to.
    pub fn button_label(self) -> &'static str {
        self.language().toggled().native_name()
    }

    /// Edge the floating toggle is pinned to.
    pub fn corner_class(self) -> &'static str {
        if self.hebrew { "left-6" } else { "right-6" }
    }

    /// Corner of the hover dot on feature cards.
    pub fn dot_corner_class(self) -> &'static str {
        if self.hebrew { "left-2" } else { "right-2" }
    }

    /// Text alignment class, empty for LTR.
    pub fn align_class(self) -> &'static str {
        if self.hebrew { "text-right" } else { "" }
    }

    /// Justification of feature icons.
    pub fn icon_justify_class(self) -> &'static str {
        if self.hebrew {
            "flex justify-end"
        } else {
            "flex justify-start"
        }
    }

    /// Look up a string in the active language.
    pub fn text(self, key: Text) -> &'static str {
        key.in_lang(self.language())
    }
}
