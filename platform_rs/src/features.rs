//! Feature cards shown on the landing page grid.

use crate::i18n::Language;

/// A landing page feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    /// SVG path data for a 24x24 viewBox icon
    pub icon: &'static str,
    /// English title
    pub title: &'static str,
    /// Hebrew title
    pub title_localized: &'static str,
    /// English description
    pub description: &'static str,
    /// Hebrew description
    pub description_localized: &'static str,
}

impl FeatureCard {
    /// Title in `lang`.
    pub fn title(&self, lang: Language) -> &'static str {
        lang.pick(self.title, self.title_localized)
    }

    /// Description in `lang`.
    pub fn description(&self, lang: Language) -> &'static str {
        lang.pick(self.description, self.description_localized)
    }
}

/// The four cards, in display order.
pub const FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        icon: "M12 2C13.1 2 14 2.9 14 4C14 5.1 13.1 6 12 6C10.9 6 10 5.1 10 4C10 2.9 10.9 2 12 2ZM21 9V7L15 1L13.5 2.5L16.17 5.17L10.5 10.84L9.83 10.17L8.42 11.58L12 15.16L22.59 4.58L21 9ZM11 20.5C11 21.3 10.3 22 9.5 22S8 21.3 8 20.5 8.7 19 9.5 19 11 19.7 11 20.5ZM13 20.5C13 21.3 12.3 22 11.5 22S10 21.3 10 20.5 10.7 19 11.5 19 13 19.7 13 20.5Z",
        title: "AI Chatbot",
        title_localized: "צ'אט בוט AI",
        description: "Voice-enabled smart assistant",
        description_localized: "עוזר חכם עם תמיכה קולית",
    },
    FeatureCard {
        icon: "M7 15H9C9 16.08 10.37 17 12 17S15 16.08 15 15H17C17 17.21 14.76 19 12 19S7 17.21 7 15ZM12 2C13.1 2 14 2.9 14 4S13.1 6 12 6 10 5.1 10 4 10.9 2 12 2ZM12 7C15.31 7 18 9.69 18 13H20C20 8.58 16.42 5 12 5S4 8.58 4 13H6C6 9.69 8.69 7 12 7Z",
        title: "Dynamic Pricing",
        title_localized: "תמחור דינמי",
        description: "Stripe integration",
        description_localized: "אינטגרציה עם Stripe",
    },
    FeatureCard {
        icon: "M12 2C17.52 2 22 6.48 22 12S17.52 22 12 22 2 17.52 2 12 6.48 2 12 2ZM6.23 7.75C5.68 8.3 5.24 8.94 4.93 9.64C6.23 10.13 7.5 11.3 8.4 12.8C8.61 13.11 8.78 13.43 8.93 13.75C9.27 14.33 9.54 14.86 9.77 15.36C10.75 14.09 11.81 13.05 13.05 12.19C13.27 11.95 13.5 11.71 13.73 11.46C12.67 8.72 9.39 7.5 6.23 7.75ZM17.77 16.25C18.32 15.7 18.76 15.06 19.07 14.36C17.77 13.87 16.5 12.7 15.6 11.2C15.39 10.89 15.22 10.57 15.07 10.25C14.73 9.67 14.46 9.14 14.23 8.64C13.25 9.91 12.19 10.95 10.95 11.81C10.73 12.05 10.5 12.29 10.27 12.54C11.33 15.28 14.61 16.5 17.77 16.25Z",
        title: "Multi-Language",
        title_localized: "רב לשוני",
        description: "Hebrew RTL support",
        description_localized: "תמיכה בעברית RTL",
    },
    FeatureCard {
        icon: "M22,21H2V3H4V19H6V10H10V19H12V6H16V19H18V14H22V21Z",
        title: "A/B Testing",
        title_localized: "בדיקות A/B",
        description: "Data-driven optimization",
        description_localized: "אופטימיזציה מונעת נתונים",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_cards_with_both_languages() {
        assert_eq!(FEATURES.len(), 4);
        for card in &FEATURES {
            assert_ne!(card.title(Language::English), card.title(Language::Hebrew));
            assert_ne!(
                card.description(Language::English),
                card.description(Language::Hebrew)
            );
            assert!(!card.icon.is_empty());
        }
    }

    #[test]
    fn first_and_last_cards() {
        assert_eq!(FEATURES[0].title(Language::English), "AI Chatbot");
        assert_eq!(FEATURES[3].title(Language::Hebrew), "בדיקות A/B");
    }
}
