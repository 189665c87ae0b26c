//! # Domain Services
//!
//! Pure business logic that spans several entities.
//!
//! ## Services
//!
//! - [`offer_normalizer::build_cards`]: projects a result bundle into offer cards

pub mod offer_normalizer;

pub use offer_normalizer::build_cards;
