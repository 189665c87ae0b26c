//! # Fare Gateway Trait
//!
//! Port definition for the upstream fare API.
//!
//! The orchestrator only sees this trait, so tests can swap in stubs and
//! the HTTP adapter stays the single place that knows URLs.
//!
//! # Examples
//!
//! ```ignore
//! use fare_compare::infrastructure::providers::traits::FareGateway;
//!
//! struct MyGateway { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl FareGateway for MyGateway {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::{HistoryPayload, RealtimePayload};
use crate::domain::value_objects::{AirportCode, SearchCriteria};
use crate::infrastructure::providers::error::FetchResult;
use async_trait::async_trait;
use std::fmt;

/// Source of live quotes and historical best prices.
#[async_trait]
pub trait FareGateway: Send + Sync + fmt::Debug {
    /// Fetches live provider quotes for the full criteria.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` if the request fails or the body cannot be decoded.
    async fn fetch_realtime(&self, criteria: &SearchCriteria) -> FetchResult<RealtimePayload>;

    /// Fetches the best prices ever recorded for a route.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` if the request fails or the body cannot be decoded.
    async fn fetch_history(
        &self,
        origin: &AirportCode,
        destination: &AirportCode,
    ) -> FetchResult<HistoryPayload>;
}
