//! Error types

use thiserror::Error;

/// Failure reported by an external collaborator (webhook feed, billing service).
///
/// `Clone` so a failed load can sit inside reactive state and be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("Webhook feed unavailable: {0}")]
    FeedUnavailable(String),

    #[error("Billing service error: {0}")]
    Billing(String),

    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// Configuration loading / validation error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Unknown language: {0} (expected \"en\" or \"he\")")]
    UnknownLanguage(String),
}
