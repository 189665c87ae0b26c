//! # Domain Enums
//!
//! Enumeration types for the fare comparison domain:
//!
//! - [`OfferSource`] - The three price sources shown side by side
//! - [`SearchLeg`] - The two upstream requests issued per search
//!
//! Both implement `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseEnumError {
    /// The string did not match any variant.
    #[error("invalid {0} value: {1:?}")]
    InvalidValue(&'static str, String),
}

/// Identity of an offer card.
///
/// Cards are always produced in the order of [`OfferSource::ALL`].
///
/// # Examples
///
/// ```
/// use fare_compare::domain::value_objects::OfferSource;
///
/// assert_eq!(OfferSource::Azul.to_string(), "azul");
/// assert_eq!(OfferSource::History.title(), "History");
/// assert_eq!("SMILES".parse::<OfferSource>().ok(), Some(OfferSource::Smiles));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferSource {
    /// Smiles live quote, miles and cash from a single provider response.
    Smiles,
    /// Azul live quote, merged from the separate miles and cash responses.
    Azul,
    /// Best prices ever recorded for the route.
    History,
}

impl OfferSource {
    /// All sources in display order.
    pub const ALL: [Self; 3] = [Self::Smiles, Self::Azul, Self::History];

    /// Returns the stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smiles => "smiles",
            Self::Azul => "azul",
            Self::History => "history",
        }
    }

    /// Returns the human-readable card title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Smiles => "Smiles",
            Self::Azul => "Azul",
            Self::History => "History",
        }
    }

    /// Returns true for the historical archive source.
    #[inline]
    #[must_use]
    pub const fn is_historical(self) -> bool {
        matches!(self, Self::History)
    }
}

impl fmt::Display for OfferSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfferSource {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smiles" => Ok(Self::Smiles),
            "azul" => Ok(Self::Azul),
            "history" => Ok(Self::History),
            _ => Err(ParseEnumError::InvalidValue("OfferSource", s.to_string())),
        }
    }
}

/// One of the two upstream requests a search issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchLeg {
    /// Live provider quotes (`/search`).
    Realtime,
    /// Historical best prices (`/history`).
    History,
}

impl SearchLeg {
    /// Returns the upstream endpoint path for this leg.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Realtime => "search",
            Self::History => "history",
        }
    }

    /// Message reported when the upstream fails without a response body.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Realtime => "Failed to query live fares.",
            Self::History => "Failed to query the price history.",
        }
    }
}

impl fmt::Display for SearchLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Realtime => write!(f, "realtime"),
            Self::History => write!(f, "history"),
        }
    }
}

impl FromStr for SearchLeg {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "realtime" | "search" => Ok(Self::Realtime),
            "history" => Ok(Self::History),
            _ => Err(ParseEnumError::InvalidValue("SearchLeg", s.to_string())),
        }
    }
}
