//! # Price Quotes
//!
//! Raw quote shapes returned by the fare API.
//!
//! Every field is optional. A missing value means the provider did not
//! offer or compute it; it is never treated as zero.
//!
//! # Examples
//!
//! ```
//! use fare_compare::domain::entities::{PriceLeg, PriceQuote};
//!
//! let quote: PriceQuote = serde_json::from_str(
//!     r#"{"outbound": {"miles": 20000}, "total": {"miles": 45000, "money": null}}"#,
//! ).unwrap();
//!
//! assert_eq!(quote.total_miles(), Some(45000.0));
//! assert_eq!(quote.total_money(), None);
//! assert_eq!(quote.inbound, None);
//! ```

use crate::domain::entities::lenient::{
    date_or_none, finite_or_none, message_or_none, object_or_none,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One directional price point, in miles and/or cash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceLeg {
    /// Price in loyalty miles.
    #[serde(default, deserialize_with = "finite_or_none")]
    pub miles: Option<f64>,
    /// Price in cash.
    #[serde(default, deserialize_with = "finite_or_none")]
    pub money: Option<f64>,
}

impl PriceLeg {
    /// Creates a leg with both prices.
    #[must_use]
    pub const fn new(miles: Option<f64>, money: Option<f64>) -> Self {
        Self { miles, money }
    }

    /// Creates a miles-only leg.
    #[must_use]
    pub const fn miles(miles: f64) -> Self {
        Self::new(Some(miles), None)
    }

    /// Creates a cash-only leg.
    #[must_use]
    pub const fn money(money: f64) -> Self {
        Self::new(None, Some(money))
    }

    /// Returns true if neither price is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.miles.is_none() && self.money.is_none()
    }
}

/// A provider's round-trip quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Cheapest outbound leg.
    #[serde(default, deserialize_with = "object_or_none")]
    pub outbound: Option<PriceLeg>,
    /// Cheapest inbound leg.
    #[serde(default, deserialize_with = "object_or_none")]
    pub inbound: Option<PriceLeg>,
    /// Round-trip total as reported by the provider.
    #[serde(default, deserialize_with = "object_or_none")]
    pub total: Option<PriceLeg>,
    /// Provider-side failure message, when the scraper could not quote.
    #[serde(default, deserialize_with = "message_or_none", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PriceQuote {
    /// Creates an empty quote.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the outbound leg.
    #[must_use]
    pub fn with_outbound(mut self, leg: PriceLeg) -> Self {
        self.outbound = Some(leg);
        self
    }

    /// Sets the inbound leg.
    #[must_use]
    pub fn with_inbound(mut self, leg: PriceLeg) -> Self {
        self.inbound = Some(leg);
        self
    }

    /// Sets the round-trip total.
    #[must_use]
    pub fn with_total(mut self, leg: PriceLeg) -> Self {
        self.total = Some(leg);
        self
    }

    /// Sets the provider error message.
    #[must_use]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Total price in miles.
    #[must_use]
    pub fn total_miles(&self) -> Option<f64> {
        self.total.and_then(|leg| leg.miles)
    }

    /// Total price in cash.
    #[must_use]
    pub fn total_money(&self) -> Option<f64> {
        self.total.and_then(|leg| leg.money)
    }

    /// Outbound price in miles.
    #[must_use]
    pub fn outbound_miles(&self) -> Option<f64> {
        self.outbound.and_then(|leg| leg.miles)
    }

    /// Outbound price in cash.
    #[must_use]
    pub fn outbound_money(&self) -> Option<f64> {
        self.outbound.and_then(|leg| leg.money)
    }

    /// Inbound price in miles.
    #[must_use]
    pub fn inbound_miles(&self) -> Option<f64> {
        self.inbound.and_then(|leg| leg.miles)
    }

    /// Inbound price in cash.
    #[must_use]
    pub fn inbound_money(&self) -> Option<f64> {
        self.inbound.and_then(|leg| leg.money)
    }
}

/// A best-ever historical observation for a route.
///
/// The travel dates belong to the observed trip and may differ from the
/// dates that were searched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalQuote {
    /// Prices of the observed trip.
    #[serde(flatten)]
    pub quote: PriceQuote,
    /// Departure date of the observed trip.
    #[serde(default, deserialize_with = "date_or_none")]
    pub departure: Option<NaiveDate>,
    /// Return date of the observed trip.
    #[serde(rename = "return", default, deserialize_with = "date_or_none")]
    pub return_date: Option<NaiveDate>,
}

impl HistoricalQuote {
    /// Creates a historical record from a quote and its travel dates.
    #[must_use]
    pub fn new(
        quote: PriceQuote,
        departure: Option<NaiveDate>,
        return_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            quote,
            departure,
            return_date,
        }
    }
}
