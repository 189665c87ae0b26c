//! # Fare Providers
//!
//! Access to the upstream fare API.
//!
//! - [`FareGateway`]: port used by the orchestrator
//! - [`FareApiClient`]: HTTP adapter
//! - [`FetchError`]: request-level failures

pub mod error;
pub mod fare_api;
pub mod http_client;
pub mod traits;

pub use error::{FetchError, FetchResult};
pub use fare_api::FareApiClient;
pub use http_client::HttpClient;
pub use traits::FareGateway;
