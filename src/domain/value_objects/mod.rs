//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`AirportCode`]: three-letter IATA identifier
//! - [`SearchCriteria`]: validated round-trip query
//! - [`OfferSource`], [`SearchLeg`]: domain enums

pub mod airport_code;
pub mod enums;
pub mod search_criteria;

pub use airport_code::AirportCode;
pub use enums::{OfferSource, ParseEnumError, SearchLeg};
pub use search_criteria::{DATE_FORMAT, MAX_ADULTS, MIN_ADULTS, SearchCriteria};
