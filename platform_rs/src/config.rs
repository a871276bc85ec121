//! Configuration file support.
//!
//! Loads optional `saas.toml`. Every section and key is optional.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::collaborators::DEFAULT_PORTAL_URL;
use crate::error::ConfigError;
use crate::format::{DEFAULT_TIMEZONE, DisplayFormat};
use crate::i18n::Language;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "saas.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub landing: LandingConfig,
    pub dashboard: DashboardConfig,
    pub format: FormatConfig,
    pub billing: BillingConfig,
}

/// Landing page settings
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Language the toggle starts in
    pub initial_language: Language,
}

/// Dashboard widget settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Language of the webhook and billing widgets
    pub language: Language,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            language: Language::Hebrew,
        }
    }
}

/// Date/time formatting settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// IANA zone name used for displayed times
    pub timezone: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

/// Billing collaborator settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// Customer portal the mock billing service hands out
    pub portal_url: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            portal_url: DEFAULT_PORTAL_URL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate TOML content.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.display_format()?;
        Ok(config)
    }

    /// Load from a path, failing if it is missing or invalid.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from a path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    /// Formatter for the configured timezone.
    pub fn display_format(&self) -> Result<DisplayFormat, ConfigError> {
        DisplayFormat::from_timezone_name(&self.format.timezone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.landing.initial_language, Language::English);
        assert_eq!(config.dashboard.language, Language::Hebrew);
        assert_eq!(config.format.timezone, "Asia/Jerusalem");
        assert_eq!(config.billing.portal_url, DEFAULT_PORTAL_URL);
        assert_eq!(config.display_format().unwrap(), DisplayFormat::default());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load_from_path(&temp.path().join(CONFIG_FILE));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_from_path_missing_file_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = SiteConfig::from_path(&temp.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
[landing]
initial_language = "he"

[dashboard]
language = "en"

[format]
timezone = "Europe/Madrid"

[billing]
portal_url = "https://portal.example.com/session"
"#
        )
        .expect("write config");

        let config = SiteConfig::load_from_path(&config_path);
        assert_eq!(config.landing.initial_language, Language::Hebrew);
        assert_eq!(config.dashboard.language, Language::English);
        assert_eq!(
            config.display_format().unwrap().timezone(),
            chrono_tz::Europe::Madrid
        );
        assert_eq!(config.billing.portal_url, "https://portal.example.com/session");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SiteConfig::from_toml_str("[format]\ntimezone = \"UTC\"\n").unwrap();
        assert_eq!(config.dashboard.language, Language::Hebrew);
        assert_eq!(config.format.timezone, "UTC");
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join(CONFIG_FILE);
        std::fs::File::create(&config_path).expect("create empty config");

        let config = SiteConfig::load_from_path(&config_path);
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_unknown_timezone_rejected() {
        let err = SiteConfig::from_toml_str("[format]\ntimezone = \"Nowhere/City\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTimezone(_)));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let err = SiteConfig::from_toml_str("[landing]\ninitial_language = \"fr\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("Unknown language: fr"), "{err}");
    }

    #[test]
    fn test_language_names_accepted() {
        let config = SiteConfig::from_toml_str(
            "[landing]\ninitial_language = \"hebrew\"\n\n[dashboard]\nlanguage = \"EN\"\n",
        )
        .unwrap();
        assert_eq!(config.landing.initial_language, Language::Hebrew);
        assert_eq!(config.dashboard.language, Language::English);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "[format]\ntimezone = \"Nowhere/City\"\n").expect("write");

        assert_eq!(SiteConfig::load_from_path(&config_path), SiteConfig::default());
    }
}
