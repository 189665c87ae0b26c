//! # Domain Entities
//!
//! Upstream payload shapes and the normalized records derived from them.
//!
//! ## Payloads
//!
//! - [`RealtimePayload`]: live provider quotes
//! - [`HistoryPayload`]: best historical prices
//! - [`ResultBundle`]: both payloads plus the searched criteria
//!
//! ## Display Records
//!
//! - [`OfferCard`]: one normalized price summary per source

mod lenient;
pub mod offer_card;
pub mod payloads;
pub mod price_quote;

pub use offer_card::OfferCard;
pub use payloads::{HistoryPayload, RealtimePayload, ResultBundle};
pub use price_quote::{HistoricalQuote, PriceLeg, PriceQuote};
