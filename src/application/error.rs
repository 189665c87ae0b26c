//! # Search Errors
//!
//! The single failure type a search surfaces to its caller.
//!
//! ```text
//! SearchError
//! ├── Upstream  - a leg answered with a non-success status
//! └── Transport - a leg produced no usable answer
//! ```
//!
//! `Display` renders only the human-readable message, so the error can be
//! shown to the user as-is. Transport details never leak into it.
//!
//! # Examples
//!
//! ```
//! use fare_compare::application::error::SearchError;
//! use fare_compare::domain::value_objects::SearchLeg;
//!
//! let err = SearchError::upstream(SearchLeg::Realtime, 500, "Smiles is down");
//! assert_eq!(err.to_string(), "Smiles is down");
//!
//! let err = SearchError::upstream(SearchLeg::History, 502, "  ");
//! assert_eq!(err.to_string(), "Failed to query the price history.");
//! ```

use crate::domain::value_objects::SearchLeg;
use crate::infrastructure::providers::FetchError;
use thiserror::Error;

/// Failure of a whole search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A leg returned a non-success status.
    #[error("{message}")]
    Upstream {
        /// Failing leg.
        leg: SearchLeg,
        /// HTTP status code.
        status: u16,
        /// Response body, or the leg's generic message when blank.
        message: String,
    },

    /// A leg failed before a usable response was obtained.
    #[error("{message}")]
    Transport {
        /// Failing leg.
        leg: SearchLeg,
        /// Generic message for the leg.
        message: String,
    },
}

impl SearchError {
    /// Creates an upstream error from a status and response body.
    #[must_use]
    pub fn upstream(leg: SearchLeg, status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.trim().is_empty() {
            leg.failure_message().to_string()
        } else {
            body
        };
        Self::Upstream {
            leg,
            status,
            message,
        }
    }

    /// Creates a transport error with the leg's generic message.
    #[must_use]
    pub fn transport(leg: SearchLeg) -> Self {
        Self::Transport {
            leg,
            message: leg.failure_message().to_string(),
        }
    }

    /// Converts a fetch failure on `leg`.
    #[must_use]
    pub fn from_fetch(leg: SearchLeg, error: FetchError) -> Self {
        match error {
            FetchError::Status { status, body } => Self::upstream(leg, status, body),
            _ => Self::transport(leg),
        }
    }

    /// Returns the failing leg.
    #[must_use]
    pub fn leg(&self) -> SearchLeg {
        match self {
            Self::Upstream { leg, .. } | Self::Transport { leg, .. } => *leg,
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Upstream { message, .. } | Self::Transport { message, .. } => message,
        }
    }

    /// Returns the HTTP status for upstream errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }

    /// Returns true if the upstream answered with an error status.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }

    /// Returns true if no usable response was obtained.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// Result type for searches.
pub type SearchResult<T> = Result<T, SearchError>;
