//! # Domain Errors
//!
//! Validation failures raised while turning raw search input into
//! [`SearchCriteria`](crate::domain::value_objects::SearchCriteria).
//!
//! These errors never reach the search orchestrator: a criteria value can
//! only exist once it has passed validation.
//!
//! # Examples
//!
//! ```
//! use fare_compare::domain::errors::ValidationError;
//!
//! let err = ValidationError::missing_field("origin");
//! assert_eq!(err.to_string(), "origin is required");
//! assert_eq!(err.field(), Some("origin"));
//! ```

use chrono::NaiveDate;
use thiserror::Error;

/// Error type for rejected search input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("{field} is required")]
    MissingField {
        /// Name of the empty field.
        field: &'static str,
    },

    /// The value is not a three-letter IATA airport code.
    #[error("invalid airport code: {value:?}")]
    InvalidAirportCode {
        /// The rejected input.
        value: String,
    },

    /// The value is not a calendar date.
    #[error("invalid date for {field}: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// Name of the date field.
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// The return date precedes the departure date.
    #[error("return date {return_date} is before departure date {departure_date}")]
    ReturnBeforeDeparture {
        /// Requested departure date.
        departure_date: NaiveDate,
        /// Requested return date.
        return_date: NaiveDate,
    },

    /// Passenger count outside the accepted range.
    #[error("adults must be between {min} and {max}, got {value}")]
    AdultsOutOfRange {
        /// The rejected count.
        value: u8,
        /// Smallest accepted count.
        min: u8,
        /// Largest accepted count.
        max: u8,
    },
}

impl ValidationError {
    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates an invalid airport code error.
    #[must_use]
    pub fn invalid_airport_code(value: impl Into<String>) -> Self {
        Self::InvalidAirportCode {
            value: value.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            field,
            value: value.into(),
        }
    }

    /// Returns the name of the offending form field, when one applies.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field } | Self::InvalidDate { field, .. } => Some(field),
            Self::ReturnBeforeDeparture { .. } => Some("return_date"),
            Self::AdultsOutOfRange { .. } => Some("adults"),
            Self::InvalidAirportCode { .. } => None,
        }
    }
}

/// Result type for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
