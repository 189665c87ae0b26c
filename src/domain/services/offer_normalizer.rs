//! # Offer Normalizer
//!
//! Projects the two upstream payloads of a search into exactly three
//! [`OfferCard`]s, in the fixed order smiles, azul, history.
//!
//! Every field is projected on its own. A missing object anywhere in the
//! source tree yields an absent field on the card and never an error.
//! Totals are taken only from the same source's `total`; legs are never
//! summed into one.
//!
//! # Fallback Chains (history card)
//!
//! ```text
//! miles         best_miles.total.miles → best_money.total.miles
//! money         best_money.total.money
//! outboundMiles best_miles.outbound.miles
//! inboundMiles  best_miles.inbound.miles
//! outboundCash  best_money.outbound.money
//! inboundCash   best_money.inbound.money
//! departure     best_miles.departure → best_money.departure
//! returnDate    best_miles.return    → best_money.return
//! ```
//!
//! # Examples
//!
//! ```
//! use fare_compare::domain::services::build_cards;
//!
//! assert!(build_cards(None).is_empty());
//! ```

use crate::domain::entities::{
    HistoryPayload, OfferCard, PriceQuote, RealtimePayload, ResultBundle,
};
use crate::domain::value_objects::OfferSource;

/// Builds the offer cards for a search result.
///
/// Returns an empty vector when there is no bundle, and exactly one card
/// per [`OfferSource::ALL`] entry otherwise.
#[must_use]
pub fn build_cards(bundle: Option<&ResultBundle>) -> Vec<OfferCard> {
    let Some(bundle) = bundle else {
        return Vec::new();
    };

    vec![
        smiles_card(&bundle.realtime),
        azul_card(&bundle.realtime),
        history_card(&bundle.history),
    ]
}

fn smiles_card(realtime: &RealtimePayload) -> OfferCard {
    let smiles = realtime.smiles.as_ref();

    OfferCard {
        miles: smiles.and_then(PriceQuote::total_miles),
        money: smiles.and_then(PriceQuote::total_money),
        outbound_miles: smiles.and_then(PriceQuote::outbound_miles),
        outbound_cash: smiles.and_then(PriceQuote::outbound_money),
        inbound_miles: smiles.and_then(PriceQuote::inbound_miles),
        inbound_cash: smiles.and_then(PriceQuote::inbound_money),
        notices: notices([smiles.and_then(|q| q.error.as_deref())]),
        ..OfferCard::empty(OfferSource::Smiles)
    }
}

/// Miles fields come from `azul_miles`, cash fields from `azul_cash`.
fn azul_card(realtime: &RealtimePayload) -> OfferCard {
    let miles = realtime.azul_miles.as_ref();
    let cash = realtime.azul_cash.as_ref();

    OfferCard {
        miles: miles.and_then(PriceQuote::total_miles),
        money: cash.and_then(PriceQuote::total_money),
        outbound_miles: miles.and_then(PriceQuote::outbound_miles),
        outbound_cash: cash.and_then(PriceQuote::outbound_money),
        inbound_miles: miles.and_then(PriceQuote::inbound_miles),
        inbound_cash: cash.and_then(PriceQuote::inbound_money),
        notices: notices([
            miles.and_then(|q| q.error.as_deref()),
            cash.and_then(|q| q.error.as_deref()),
        ]),
        ..OfferCard::empty(OfferSource::Azul)
    }
}

fn history_card(history: &HistoryPayload) -> OfferCard {
    let best_miles = history.best_miles.as_ref();
    let best_money = history.best_money.as_ref();
    let by_miles = best_miles.map(|record| &record.quote);
    let by_money = best_money.map(|record| &record.quote);

    OfferCard {
        miles: first_present([
            by_miles.and_then(PriceQuote::total_miles),
            by_money.and_then(PriceQuote::total_miles),
        ]),
        money: by_money.and_then(PriceQuote::total_money),
        outbound_miles: by_miles.and_then(PriceQuote::outbound_miles),
        outbound_cash: by_money.and_then(PriceQuote::outbound_money),
        inbound_miles: by_miles.and_then(PriceQuote::inbound_miles),
        inbound_cash: by_money.and_then(PriceQuote::inbound_money),
        departure: first_present([
            best_miles.and_then(|r| r.departure),
            best_money.and_then(|r| r.departure),
        ]),
        return_date: first_present([
            best_miles.and_then(|r| r.return_date),
            best_money.and_then(|r| r.return_date),
        ]),
        notices: notices([
            history.error.as_deref(),
            by_miles.and_then(|q| q.error.as_deref()),
            by_money.and_then(|q| q.error.as_deref()),
        ]),
        ..OfferCard::empty(OfferSource::History)
    }
}

/// First candidate that is present, in list order.
fn first_present<T, const N: usize>(candidates: [Option<T>; N]) -> Option<T> {
    candidates.into_iter().flatten().next()
}

fn notices<const N: usize>(messages: [Option<&str>; N]) -> Vec<String> {
    messages.into_iter().flatten().map(str::to_owned).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::entities::{HistoricalQuote, PriceLeg};
    use crate::domain::value_objects::{AirportCode, SearchCriteria};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn criteria() -> SearchCriteria {
        SearchCriteria::new(
            AirportCode::new("GRU").unwrap(),
            AirportCode::new("REC").unwrap(),
            date("2025-03-01"),
            date("2025-03-05"),
            1,
        )
        .unwrap()
    }

    fn bundle(realtime: RealtimePayload, history: HistoryPayload) -> ResultBundle {
        ResultBundle::new(criteria(), realtime, history)
    }

    fn card(cards: &[OfferCard], id: OfferSource) -> &OfferCard {
        cards.iter().find(|c| c.id == id).expect("card present")
    }

    #[test]
    fn absent_bundle_yields_no_cards() {
        assert!(build_cards(None).is_empty());
    }

    #[test]
    fn empty_payloads_yield_three_blank_cards() {
        let cards = build_cards(Some(&bundle(
            RealtimePayload::default(),
            HistoryPayload::default(),
        )));

        let ids: Vec<OfferSource> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, OfferSource::ALL);
        for card in &cards {
            assert_eq!(card.miles, None);
            assert_eq!(card.money, None);
            assert!(!card.has_outbound());
            assert!(!card.has_inbound());
        }
    }

    #[test]
    fn smiles_card_reads_one_quote() {
        let realtime = RealtimePayload {
            smiles: Some(
                PriceQuote::new()
                    .with_outbound(PriceLeg::new(Some(21000.0), Some(610.5)))
                    .with_inbound(PriceLeg::new(Some(19000.0), None))
                    .with_total(PriceLeg::new(Some(40000.0), Some(1200.5))),
            ),
            ..RealtimePayload::default()
        };
        let cards = build_cards(Some(&bundle(realtime, HistoryPayload::default())));
        let smiles = card(&cards, OfferSource::Smiles);

        assert_eq!(smiles.title, "Smiles");
        assert_eq!(smiles.miles, Some(40000.0));
        assert_eq!(smiles.money, Some(1200.5));
        assert_eq!(smiles.outbound_miles, Some(21000.0));
        assert_eq!(smiles.outbound_cash, Some(610.5));
        assert_eq!(smiles.inbound_miles, Some(19000.0));
        assert_eq!(smiles.inbound_cash, None);
        assert_eq!(smiles.departure, None);
    }

    #[test]
    fn missing_total_is_not_summed_from_legs() {
        let realtime = RealtimePayload {
            smiles: Some(
                PriceQuote::new()
                    .with_outbound(PriceLeg::new(Some(21000.0), Some(600.0)))
                    .with_inbound(PriceLeg::new(Some(19000.0), Some(600.0))),
            ),
            ..RealtimePayload::default()
        };
        let cards = build_cards(Some(&bundle(realtime, HistoryPayload::default())));
        let smiles = card(&cards, OfferSource::Smiles);

        assert_eq!(smiles.miles, None);
        assert_eq!(smiles.money, None);
        assert_eq!(smiles.outbound_miles, Some(21000.0));
    }

    #[test]
    fn azul_miles_survive_missing_cash() {
        let realtime = RealtimePayload {
            azul_miles: Some(PriceQuote::new().with_total(PriceLeg::miles(45000.0))),
            azul_cash: None,
            ..RealtimePayload::default()
        };
        let cards = build_cards(Some(&bundle(realtime, HistoryPayload::default())));
        let azul = card(&cards, OfferSource::Azul);

        assert_eq!(azul.miles, Some(45000.0));
        assert_eq!(azul.money, None);
    }

    #[test]
    fn azul_cash_survives_missing_miles() {
        let realtime = RealtimePayload {
            azul_miles: None,
            azul_cash: Some(
                PriceQuote::new()
                    .with_outbound(PriceLeg::money(480.0))
                    .with_total(PriceLeg::money(990.9)),
            ),
            ..RealtimePayload::default()
        };
        let cards = build_cards(Some(&bundle(realtime, HistoryPayload::default())));
        let azul = card(&cards, OfferSource::Azul);

        assert_eq!(azul.miles, None);
        assert_eq!(azul.money, Some(990.9));
        assert_eq!(azul.outbound_cash, Some(480.0));
        assert_eq!(azul.outbound_miles, None);
    }

    #[test]
    fn azul_ignores_cross_source_values() {
        // Cash inside the miles quote and miles inside the cash quote are not used.
        let realtime = RealtimePayload {
            azul_miles: Some(PriceQuote::new().with_total(PriceLeg::new(Some(45000.0), Some(1.0)))),
            azul_cash: Some(PriceQuote::new().with_total(PriceLeg::new(Some(2.0), Some(990.0)))),
            ..RealtimePayload::default()
        };
        let cards = build_cards(Some(&bundle(realtime, HistoryPayload::default())));
        let azul = card(&cards, OfferSource::Azul);

        assert_eq!(azul.miles, Some(45000.0));
        assert_eq!(azul.money, Some(990.0));
    }

    #[test]
    fn history_falls_back_to_best_money() {
        let history = HistoryPayload {
            best_miles: None,
            best_money: Some(HistoricalQuote::new(
                PriceQuote::new().with_total(PriceLeg::new(Some(40000.0), Some(1200.0))),
                Some(date("2025-01-10")),
                Some(date("2025-01-15")),
            )),
            error: None,
        };
        let cards = build_cards(Some(&bundle(RealtimePayload::default(), history)));
        let hist = card(&cards, OfferSource::History);

        assert_eq!(hist.title, "History");
        assert_eq!(hist.miles, Some(40000.0));
        assert_eq!(hist.money, Some(1200.0));
        assert_eq!(hist.departure, Some(date("2025-01-10")));
        assert_eq!(hist.return_date, Some(date("2025-01-15")));
    }

    #[test]
    fn history_prefers_best_miles_for_miles_and_dates() {
        let history = HistoryPayload {
            best_miles: Some(HistoricalQuote::new(
                PriceQuote::new()
                    .with_outbound(PriceLeg::new(Some(15000.0), Some(700.0)))
                    .with_total(PriceLeg::new(Some(32000.0), Some(1500.0))),
                Some(date("2024-08-01")),
                Some(date("2024-08-09")),
            )),
            best_money: Some(HistoricalQuote::new(
                PriceQuote::new()
                    .with_outbound(PriceLeg::new(Some(30000.0), Some(400.0)))
                    .with_total(PriceLeg::new(Some(60000.0), Some(900.0))),
                Some(date("2024-10-01")),
                Some(date("2024-10-04")),
            )),
            error: None,
        };
        let cards = build_cards(Some(&bundle(RealtimePayload::default(), history)));
        let hist = card(&cards, OfferSource::History);

        assert_eq!(hist.miles, Some(32000.0));
        assert_eq!(hist.money, Some(900.0));
        assert_eq!(hist.outbound_miles, Some(15000.0));
        assert_eq!(hist.outbound_cash, Some(400.0));
        assert_eq!(hist.departure, Some(date("2024-08-01")));
        assert_eq!(hist.return_date, Some(date("2024-08-09")));
    }

    #[test]
    fn history_money_never_borrows_from_best_miles() {
        let history = HistoryPayload {
            best_miles: Some(HistoricalQuote::new(
                PriceQuote::new().with_total(PriceLeg::new(Some(32000.0), Some(1500.0))),
                None,
                None,
            )),
            best_money: None,
            error: None,
        };
        let cards = build_cards(Some(&bundle(RealtimePayload::default(), history)));
        let hist = card(&cards, OfferSource::History);

        assert_eq!(hist.miles, Some(32000.0));
        assert_eq!(hist.money, None);
    }

    #[test]
    fn history_dates_fall_back_per_field() {
        let history = HistoryPayload {
            best_miles: Some(HistoricalQuote::new(
                PriceQuote::new(),
                Some(date("2024-08-01")),
                None,
            )),
            best_money: Some(HistoricalQuote::new(
                PriceQuote::new(),
                Some(date("2024-10-01")),
                Some(date("2024-10-04")),
            )),
            error: None,
        };
        let cards = build_cards(Some(&bundle(RealtimePayload::default(), history)));
        let hist = card(&cards, OfferSource::History);

        assert_eq!(hist.departure, Some(date("2024-08-01")));
        assert_eq!(hist.return_date, Some(date("2024-10-04")));
    }

    #[test]
    fn provider_errors_become_notices() {
        let realtime = RealtimePayload {
            smiles: Some(PriceQuote::new().with_error("captcha required")),
            azul_miles: Some(PriceQuote::new().with_error("miles down")),
            azul_cash: Some(PriceQuote::new().with_error("cash down")),
        };
        let history = HistoryPayload {
            error: Some("unknown route".to_string()),
            ..HistoryPayload::default()
        };
        let cards = build_cards(Some(&bundle(realtime, history)));

        assert_eq!(card(&cards, OfferSource::Smiles).notices, ["captcha required"]);
        assert_eq!(card(&cards, OfferSource::Azul).notices, ["miles down", "cash down"]);
        assert_eq!(card(&cards, OfferSource::History).notices, ["unknown route"]);
    }

    #[test]
    fn parsed_payloads_with_holes() {
        let realtime: RealtimePayload = serde_json::from_str(
            r#"{"smiles": {"total": null}, "azul_miles": {"outbound": {}}, "azul_cash": 7}"#,
        )
        .unwrap();
        let history: HistoryPayload =
            serde_json::from_str(r#"{"best_miles": {"total": {"miles": "n/a"}}}"#).unwrap();

        let cards = build_cards(Some(&bundle(realtime, history)));
        assert_eq!(cards.len(), 3);
        assert!(cards.iter().all(|c| c.miles.is_none() && c.money.is_none()));
    }

    fn price() -> impl Strategy<Value = Option<f64>> {
        proptest::option::of(0.0f64..1_000_000.0)
    }

    fn leg() -> impl Strategy<Value = Option<PriceLeg>> {
        proptest::option::of((price(), price()).prop_map(|(miles, money)| PriceLeg::new(miles, money)))
    }

    fn quote() -> impl Strategy<Value = Option<PriceQuote>> {
        proptest::option::of((leg(), leg(), leg()).prop_map(|(outbound, inbound, total)| PriceQuote {
            outbound,
            inbound,
            total,
            error: None,
        }))
    }

    fn historical() -> impl Strategy<Value = Option<HistoricalQuote>> {
        proptest::option::of((quote(), proptest::option::of(0i64..3650)).prop_map(|(q, offset)| {
            let departure = offset.map(|days| date("2020-01-01") + chrono::Duration::days(days));
            HistoricalQuote::new(q.unwrap_or_default(), departure, departure)
        }))
    }

    proptest! {
        #[test]
        fn always_three_cards_in_order(
            smiles in quote(),
            azul_miles in quote(),
            azul_cash in quote(),
            best_miles in historical(),
            best_money in historical(),
        ) {
            let bundle = bundle(
                RealtimePayload { smiles, azul_miles, azul_cash },
                HistoryPayload { best_miles, best_money, error: None },
            );
            let cards = build_cards(Some(&bundle));
            let ids: Vec<OfferSource> = cards.iter().map(|c| c.id).collect();
            prop_assert_eq!(ids, OfferSource::ALL.to_vec());
        }

        #[test]
        fn build_cards_is_idempotent(
            smiles in quote(),
            azul_miles in quote(),
            azul_cash in quote(),
            best_miles in historical(),
            best_money in historical(),
        ) {
            let bundle = bundle(
                RealtimePayload { smiles, azul_miles, azul_cash },
                HistoryPayload { best_miles, best_money, error: None },
            );
            prop_assert_eq!(build_cards(Some(&bundle)), build_cards(Some(&bundle)));
        }

        #[test]
        fn totals_only_from_same_source(smiles in quote()) {
            let bundle = bundle(
                RealtimePayload { smiles: smiles.clone(), ..RealtimePayload::default() },
                HistoryPayload::default(),
            );
            let cards = build_cards(Some(&bundle));
            let expected_miles = smiles.as_ref().and_then(PriceQuote::total_miles);
            let expected_money = smiles.as_ref().and_then(PriceQuote::total_money);
            prop_assert_eq!(cards[0].miles, expected_miles);
            prop_assert_eq!(cards[0].money, expected_money);
        }
    }
}
