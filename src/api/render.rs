//! # Results View
//!
//! Plain-text rendering of a [`SearchState`].

use crate::api::format::{format_cash, format_miles};
use crate::application::services::SearchState;
use crate::domain::entities::OfferCard;
use crate::domain::value_objects::SearchCriteria;

/// Shown before the first search.
pub const IDLE_PROMPT: &str = "Run a search to compare miles, cash and historical offers.";

/// Shown while providers are being queried.
pub const SEARCHING_INDICATOR: &str = "Querying providers…";

/// Shown when a successful search produced no cards.
pub const NO_RESULTS: &str = "No results available for the given criteria.";

/// Shown under an error message.
pub const NEW_SEARCH_HINT: &str = "Start a new search to try again.";

/// Renders the whole results view.
#[must_use]
pub fn render_state(state: &SearchState) -> String {
    match state {
        SearchState::Idle => IDLE_PROMPT.to_string(),
        SearchState::Searching { criteria } => {
            format!("{}\n{SEARCHING_INDICATOR}", header(criteria))
        }
        SearchState::Success(outcome) => {
            let mut out = header(&outcome.criteria);
            if outcome.cards.is_empty() {
                out.push('\n');
                out.push_str(NO_RESULTS);
            }
            for card in &outcome.cards {
                out.push('\n');
                out.push_str(&render_card(card));
            }
            out.trim_end().to_string()
        }
        SearchState::Failed(error) => format!("Error: {error}\n{NEW_SEARCH_HINT}"),
    }
}

fn header(criteria: &SearchCriteria) -> String {
    let nights = criteria.trip_nights();
    let unit = if nights == 1 { "night" } else { "nights" };
    format!(
        "Route: {criteria}\nPassengers: {} · {nights} {unit}\n",
        criteria.adults()
    )
}

fn row(label: &str, value: &str) -> String {
    format!("  {label:<12} {value}\n")
}

/// Renders one card.
///
/// Leg rows appear only when the leg has a price, and the validity line
/// only when both travel dates are known.
#[must_use]
pub fn render_card(card: &OfferCard) -> String {
    let mut out = format!("{}\n", card.title);
    out.push_str(&row("Total miles", &format_miles(card.miles)));
    out.push_str(&row("Total cash", &format_cash(card.money)));
    if card.has_outbound() {
        let value = format!(
            "{} | {}",
            format_miles(card.outbound_miles),
            format_cash(card.outbound_cash)
        );
        out.push_str(&row("Outbound", &value));
    }
    if card.has_inbound() {
        let value = format!(
            "{} | {}",
            format_miles(card.inbound_miles),
            format_cash(card.inbound_cash)
        );
        out.push_str(&row("Inbound", &value));
    }
    if let Some((departure, return_date)) = card.travel_dates() {
        out.push_str(&row("Valid for", &format!("{departure} → {return_date}")));
    }
    for notice in &card.notices {
        out.push_str(&row("Notice", notice));
    }
    out
}
