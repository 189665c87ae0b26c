//! # HTTP Client Utilities
//!
//! Thin reqwest wrapper shared by the fare API adapter.
//!
//! This module provides:
//! - Optional request timeout (transport default when unset)
//! - JSON deserialization of success bodies
//! - Verbatim capture of error bodies
//!
//! No retries are performed; a failed request is terminal.
//!
//! # Examples
//!
//! ```ignore
//! use fare_compare::infrastructure::providers::http_client::HttpClient;
//!
//! let client = HttpClient::new(None)?;
//! let payload: MyPayload = client.get_with_params(url, &[("origin", "GRU")]).await?;
//! ```

use crate::infrastructure::providers::error::{FetchError, FetchResult};
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for the fare API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds, if any.
    timeout_ms: Option<u64>,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `timeout_ms` - Request timeout in milliseconds; `None` keeps the
    ///   transport default.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the client cannot be created.
    pub fn new(timeout_ms: Option<u64>) -> FetchResult<Self> {
        let mut builder = Client::builder();
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::client(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> Option<u64> {
        self.timeout_ms
    }

    /// Makes a GET request with query parameters and deserializes the JSON response.
    ///
    /// # Arguments
    ///
    /// * `url` - The endpoint URL.
    /// * `params` - Query parameters.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Status` with the body for non-2xx responses.
    /// Returns `FetchError::Timeout` or `FetchError::Connection` if the request fails.
    /// Returns `FetchError::Decode` if a success body cannot be parsed.
    pub async fn get_with_params<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> FetchResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }
}

/// Checks the status and decodes the body.
async fn handle_response<T: DeserializeOwned>(response: Response) -> FetchResult<T> {
    let status = response.status();

    if status.is_success() {
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&body)
            .map_err(|e| FetchError::decode(format!("Failed to parse response: {}", e)))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(FetchError::status(status.as_u16(), body))
    }
}

/// Maps a reqwest error to a FetchError.
fn map_reqwest_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::timeout("Request timed out")
    } else if error.is_connect() {
        FetchError::connection(format!("Connection failed: {}", error))
    } else if error.is_builder() {
        FetchError::client(format!("Invalid request: {}", error))
    } else {
        FetchError::connection(format!("HTTP request failed: {}", error))
    }
}
