//! # Fare API Adapter
//!
//! HTTP implementation of [`FareGateway`] against the fare API:
//!
//! - `GET {base}/search?origin&destination&departure_date&return_date&adults`
//! - `GET {base}/history?origin&destination`
//!
//! A `null` success body is read as an empty payload.

use crate::domain::entities::{HistoryPayload, RealtimePayload};
use crate::domain::value_objects::{AirportCode, DATE_FORMAT, SearchCriteria, SearchLeg};
use crate::infrastructure::config::ApiConfig;
use crate::infrastructure::providers::error::FetchResult;
use crate::infrastructure::providers::http_client::HttpClient;
use crate::infrastructure::providers::traits::FareGateway;
use async_trait::async_trait;
use tracing::debug;

/// Fare API client.
#[derive(Debug, Clone)]
pub struct FareApiClient {
    http: HttpClient,
    base_url: String,
}

impl FareApiClient {
    /// Creates a client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>, timeout_ms: Option<u64>) -> FetchResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http: HttpClient::new(timeout_ms)?,
            base_url,
        })
    }

    /// Creates a client from the `api` configuration section.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the HTTP client cannot be created.
    pub fn from_config(config: &ApiConfig) -> FetchResult<Self> {
        Self::new(config.base_url.as_str(), config.timeout_ms)
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the endpoint URL for a search leg.
    #[must_use]
    pub fn endpoint(&self, leg: SearchLeg) -> String {
        format!("{}/{}", self.base_url, leg.path())
    }
}

/// Query parameters of the live quotes request.
fn realtime_params(criteria: &SearchCriteria) -> [(&'static str, String); 5] {
    [
        ("origin", criteria.origin().to_string()),
        ("destination", criteria.destination().to_string()),
        (
            "departure_date",
            criteria.departure_date().format(DATE_FORMAT).to_string(),
        ),
        (
            "return_date",
            criteria.return_date().format(DATE_FORMAT).to_string(),
        ),
        ("adults", criteria.adults().to_string()),
    ]
}

#[async_trait]
impl FareGateway for FareApiClient {
    async fn fetch_realtime(&self, criteria: &SearchCriteria) -> FetchResult<RealtimePayload> {
        let url = self.endpoint(SearchLeg::Realtime);
        debug!(%url, "requesting live quotes");
        let payload: Option<RealtimePayload> = self
            .http
            .get_with_params(&url, &realtime_params(criteria))
            .await?;
        Ok(payload.unwrap_or_default())
    }

    async fn fetch_history(
        &self,
        origin: &AirportCode,
        destination: &AirportCode,
    ) -> FetchResult<HistoryPayload> {
        let url = self.endpoint(SearchLeg::History);
        debug!(%url, "requesting price history");
        let params = [
            ("origin", origin.as_str()),
            ("destination", destination.as_str()),
        ];
        let payload: Option<HistoryPayload> = self.http.get_with_params(&url, &params).await?;
        Ok(payload.unwrap_or_default())
    }
}
