//! # Search Criteria
//!
//! The validated parameters of one round-trip fare search.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use fare_compare::domain::value_objects::{AirportCode, SearchCriteria};
//!
//! let criteria = SearchCriteria::new(
//!     AirportCode::new("GRU").unwrap(),
//!     AirportCode::new("REC").unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
//!     1,
//! )
//! .unwrap();
//!
//! assert_eq!(criteria.trip_nights(), 4);
//! ```

use crate::domain::errors::{ValidationError, ValidationResult};
use crate::domain::value_objects::AirportCode;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Smallest accepted passenger count.
pub const MIN_ADULTS: u8 = 1;

/// Largest accepted passenger count.
pub const MAX_ADULTS: u8 = 9;

/// Wire format of dates in upstream queries.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parameters of a round-trip fare search.
///
/// # Invariants
///
/// - `return_date >= departure_date`
/// - `MIN_ADULTS <= adults <= MAX_ADULTS`
///
/// The only constructor enforces both, so any value that exists is safe to
/// hand to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchCriteria {
    origin: AirportCode,
    destination: AirportCode,
    departure_date: NaiveDate,
    return_date: NaiveDate,
    adults: u8,
}

impl SearchCriteria {
    /// Creates validated search criteria.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ReturnBeforeDeparture` if the return date
    /// precedes the departure date.
    /// Returns `ValidationError::AdultsOutOfRange` if `adults` is outside
    /// `MIN_ADULTS..=MAX_ADULTS`.
    pub fn new(
        origin: AirportCode,
        destination: AirportCode,
        departure_date: NaiveDate,
        return_date: NaiveDate,
        adults: u8,
    ) -> ValidationResult<Self> {
        if return_date < departure_date {
            return Err(ValidationError::ReturnBeforeDeparture {
                departure_date,
                return_date,
            });
        }
        if !(MIN_ADULTS..=MAX_ADULTS).contains(&adults) {
            return Err(ValidationError::AdultsOutOfRange {
                value: adults,
                min: MIN_ADULTS,
                max: MAX_ADULTS,
            });
        }

        Ok(Self {
            origin,
            destination,
            departure_date,
            return_date,
            adults,
        })
    }

    /// Returns the origin airport.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> &AirportCode {
        &self.origin
    }

    /// Returns the destination airport.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &AirportCode {
        &self.destination
    }

    /// Returns the outbound travel date.
    #[inline]
    #[must_use]
    pub fn departure_date(&self) -> NaiveDate {
        self.departure_date
    }

    /// Returns the inbound travel date.
    #[inline]
    #[must_use]
    pub fn return_date(&self) -> NaiveDate {
        self.return_date
    }

    /// Returns the number of adult passengers.
    #[inline]
    #[must_use]
    pub fn adults(&self) -> u8 {
        self.adults
    }

    /// Returns the number of nights between departure and return.
    #[must_use]
    pub fn trip_nights(&self) -> i64 {
        (self.return_date - self.departure_date).num_days()
    }
}

impl fmt::Display for SearchCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} · {} → {}",
            self.origin, self.destination, self.departure_date, self.return_date
        )
    }
}
