//! # Offer Card
//!
//! The normalized, display-ready summary of one price source.

use crate::domain::value_objects::OfferSource;
use chrono::NaiveDate;
use serde::Serialize;

/// One comparable price summary.
///
/// Serialized in camelCase (`outboundMiles`, `returnDate`, ...) for
/// consumers of the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferCard {
    /// Which source the card summarizes.
    pub id: OfferSource,
    /// Display title.
    pub title: String,
    /// Round-trip total in miles.
    pub miles: Option<f64>,
    /// Round-trip total in cash.
    pub money: Option<f64>,
    /// Outbound leg in miles.
    pub outbound_miles: Option<f64>,
    /// Outbound leg in cash.
    pub outbound_cash: Option<f64>,
    /// Inbound leg in miles.
    pub inbound_miles: Option<f64>,
    /// Inbound leg in cash.
    pub inbound_cash: Option<f64>,
    /// Departure date of the observed trip (history only).
    pub departure: Option<NaiveDate>,
    /// Return date of the observed trip (history only).
    pub return_date: Option<NaiveDate>,
    /// Provider messages attached to the card's sources.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
}

impl OfferCard {
    /// Creates a card with every price absent.
    #[must_use]
    pub fn empty(id: OfferSource) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            miles: None,
            money: None,
            outbound_miles: None,
            outbound_cash: None,
            inbound_miles: None,
            inbound_cash: None,
            departure: None,
            return_date: None,
            notices: Vec::new(),
        }
    }

    /// Returns true if the outbound leg has any price.
    #[must_use]
    pub fn has_outbound(&self) -> bool {
        self.outbound_miles.is_some() || self.outbound_cash.is_some()
    }

    /// Returns true if the inbound leg has any price.
    #[must_use]
    pub fn has_inbound(&self) -> bool {
        self.inbound_miles.is_some() || self.inbound_cash.is_some()
    }

    /// Returns both travel dates when the card carries a full date pair.
    #[must_use]
    pub fn travel_dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.departure.zip(self.return_date)
    }
}
