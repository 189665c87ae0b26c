//! # Airport Code
//!
//! Three-letter IATA airport identifier.

use crate::domain::errors::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated IATA airport code such as `GRU` or `REC`.
///
/// Input is trimmed and upper-cased; anything other than three ASCII
/// letters is rejected.
///
/// # Examples
///
/// ```
/// use fare_compare::domain::value_objects::AirportCode;
///
/// let code = AirportCode::new(" gru ").unwrap();
/// assert_eq!(code.as_str(), "GRU");
/// assert!(AirportCode::new("GR").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirportCode(String);

impl AirportCode {
    /// Creates a new airport code.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAirportCode` unless the trimmed input
    /// is exactly three ASCII letters.
    pub fn new(value: impl AsRef<str>) -> ValidationResult<Self> {
        let raw = value.as_ref();
        let trimmed = raw.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_airport_code(raw));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AirportCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AirportCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AirportCode> for String {
    fn from(code: AirportCode) -> Self {
        code.0
    }
}

impl AsRef<str> for AirportCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
