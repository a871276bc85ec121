//! Load state machine shared by both dashboards.
//!
//! ```text
//! Loading --collaborator Ok--> Ready(T)
//!    ^    --collaborator Err-> Failed(message)
//!    |___________ refresh ___________|
//! ```

use tracing::{debug, error};

use crate::error::CollaboratorError;

/// Where a dashboard is in its mount sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    /// Collaborator call outstanding
    #[default]
    Loading,
    /// Data available
    Ready(T),
    /// Collaborator failed; the message is shown in an error banner
    Failed(String),
}

impl<T> LoadState<T> {
    /// Settle a finished load. Failures are logged under `what`.
    pub fn settle(outcome: Result<T, CollaboratorError>, what: &str) -> Self {
        match outcome {
            Ok(value) => {
                debug!("{what} loaded");
                Self::Ready(value)
            }
            Err(e) => {
                error!("Failed to load {what}: {e}");
                Self::Failed(e.to_string())
            }
        }
    }

    /// Whether the loading indicator should show.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded data, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Failure message, if any.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Numbers overlapping loads so only the newest may settle.
///
/// Each refresh takes a fresh ticket; a result whose ticket is no longer
/// current was superseded and must be dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    /// Start a load and return its ticket.
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether `ticket` belongs to the newest load.
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}
