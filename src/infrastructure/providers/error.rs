//! # Fetch Errors
//!
//! Error types for upstream fare API requests.
//!
//! # Examples
//!
//! ```
//! use fare_compare::infrastructure::providers::error::FetchError;
//!
//! let error = FetchError::status(502, "bad gateway");
//! assert_eq!(error.status_code(), Some(502));
//! assert!(!error.is_transport());
//!
//! let error = FetchError::timeout("Request timed out");
//! assert!(error.is_transport());
//! ```

use thiserror::Error;

/// Error type for a single upstream request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The upstream answered with a non-success status.
    #[error("upstream returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// Request timed out.
    #[error("upstream timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("upstream connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// A success response whose body could not be decoded.
    #[error("upstream decode error: {message}")]
    Decode {
        /// Error message.
        message: String,
    },

    /// The HTTP client could not be built or the request could not be formed.
    #[error("http client error: {message}")]
    Client {
        /// Error message.
        message: String,
    },
}

impl FetchError {
    /// Creates a status error.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates a client error.
    #[must_use]
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// Returns the HTTP status for status errors.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response body for status errors.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns true for failures where no usable HTTP answer was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::Status { .. })
    }
}

/// Result type for upstream requests.
pub type FetchResult<T> = Result<T, FetchError>;
