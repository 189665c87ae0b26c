//! # Upstream Payloads
//!
//! The two response bodies a search receives, and the bundle pairing them
//! with the criteria that produced them.

use crate::domain::entities::lenient::{message_or_none, object_or_none};
use crate::domain::entities::price_quote::{HistoricalQuote, PriceQuote};
use crate::domain::value_objects::SearchCriteria;
use serde::{Deserialize, Serialize};

/// Live provider quotes from `/search`.
///
/// Azul reports miles and cash through separate endpoints, so they arrive
/// as two independent quotes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RealtimePayload {
    /// Smiles quote with both miles and cash.
    #[serde(default, deserialize_with = "object_or_none")]
    pub smiles: Option<PriceQuote>,
    /// Azul quote priced in miles.
    #[serde(default, deserialize_with = "object_or_none")]
    pub azul_miles: Option<PriceQuote>,
    /// Azul quote priced in cash.
    #[serde(default, deserialize_with = "object_or_none")]
    pub azul_cash: Option<PriceQuote>,
}

/// Best historical prices from `/history`.
///
/// Miles-optimal and money-optimal trips are tracked independently and
/// may refer to different travel dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryPayload {
    /// Cheapest trip ever observed in miles.
    #[serde(default, deserialize_with = "object_or_none")]
    pub best_miles: Option<HistoricalQuote>,
    /// Cheapest trip ever observed in cash.
    #[serde(default, deserialize_with = "object_or_none")]
    pub best_money: Option<HistoricalQuote>,
    /// Archive-side message, e.g. an unknown route.
    #[serde(default, deserialize_with = "message_or_none", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Both payloads of one successful search, with the criteria echoed back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultBundle {
    /// The criteria that were searched.
    pub criteria: SearchCriteria,
    /// Live provider quotes.
    pub realtime: RealtimePayload,
    /// Historical best prices.
    pub history: HistoryPayload,
}

impl ResultBundle {
    /// Pairs the two payloads with their criteria.
    #[must_use]
    pub fn new(criteria: SearchCriteria, realtime: RealtimePayload, history: HistoryPayload) -> Self {
        Self {
            criteria,
            realtime,
            history,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn realtime_payload_from_api_shape() {
        let payload: RealtimePayload = serde_json::from_str(
            r#"{
                "smiles": {
                    "route": "GRU -> REC",
                    "departure": "2025-03-01",
                    "return": "2025-03-05",
                    "outbound": {"miles": 21000, "money": 610.5},
                    "inbound": {"miles": 19000, "money": 590.0},
                    "total": {"miles": 40000, "money": 1200.5}
                },
                "azul_miles": {"total": {"miles": 45000}},
                "azul_cash": {"route": "GRU -> REC", "error": "timeout"}
            }"#,
        )
        .unwrap();

        assert_eq!(payload.smiles.as_ref().unwrap().total_money(), Some(1200.5));
        assert_eq!(payload.azul_miles.as_ref().unwrap().total_miles(), Some(45000.0));
        let azul_cash = payload.azul_cash.unwrap();
        assert_eq!(azul_cash.total, None);
        assert_eq!(azul_cash.error.as_deref(), Some("timeout"));
    }

    #[test]
    fn empty_object_is_valid() {
        let payload: RealtimePayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload, RealtimePayload::default());
    }

    #[test]
    fn history_error_envelope() {
        let payload: HistoryPayload =
            serde_json::from_str(r#"{"error": "No historical data found for route"}"#).unwrap();
        assert!(payload.best_miles.is_none());
        assert!(payload.best_money.is_none());
        assert!(payload.error.is_some());
    }

    #[test]
    fn history_null_records() {
        let payload: HistoryPayload = serde_json::from_str(
            r#"{"best_miles": null, "best_money": {"total": {"money": 980.0}, "departure": "2024-11-02"}}"#,
        )
        .unwrap();
        assert!(payload.best_miles.is_none());
        let best_money = payload.best_money.unwrap();
        assert_eq!(best_money.quote.total_money(), Some(980.0));
        assert_eq!(best_money.return_date, None);
    }
}
