//! # Search Orchestrator
//!
//! Runs the two upstream requests of a search concurrently and joins them
//! into a [`ResultBundle`].
//!
//! Both legs always settle before the outcome is decided. A bundle is
//! all-or-nothing: if either leg fails, the search fails, and the live
//! quotes leg is reported first when both do.

use crate::application::error::{SearchError, SearchResult};
use crate::domain::entities::ResultBundle;
use crate::domain::value_objects::{SearchCriteria, SearchLeg};
use crate::infrastructure::providers::{FareGateway, FetchResult};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;
use tracing::{info, warn};

/// Coordinates the live quotes and history requests of one search.
#[derive(Debug, Clone)]
pub struct SearchOrchestrator {
    gateway: Arc<dyn FareGateway>,
}

impl SearchOrchestrator {
    /// Creates an orchestrator over the given gateway.
    #[must_use]
    pub fn new(gateway: Arc<dyn FareGateway>) -> Self {
        Self { gateway }
    }

    /// Fetches live quotes and history for `criteria`.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Upstream` if a leg answers with a non-success
    /// status, and `SearchError::Transport` if a leg yields no usable answer.
    pub async fn run_search(&self, criteria: &SearchCriteria) -> SearchResult<ResultBundle> {
        let started = Instant::now();
        info!(
            origin = %criteria.origin(),
            destination = %criteria.destination(),
            departure_date = %criteria.departure_date(),
            return_date = %criteria.return_date(),
            adults = criteria.adults(),
            "search started"
        );

        let realtime = {
            let gateway = Arc::clone(&self.gateway);
            let criteria = criteria.clone();
            tokio::spawn(async move { gateway.fetch_realtime(&criteria).await })
        };
        let history = {
            let gateway = Arc::clone(&self.gateway);
            let origin = criteria.origin().clone();
            let destination = criteria.destination().clone();
            tokio::spawn(async move { gateway.fetch_history(&origin, &destination).await })
        };

        let (realtime, history) = tokio::join!(realtime, history);
        let realtime = settle(SearchLeg::Realtime, realtime);
        let history = settle(SearchLeg::History, history);
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match (realtime, history) {
            (Ok(realtime), Ok(history)) => {
                info!(route = %criteria, elapsed_ms, "search finished");
                Ok(ResultBundle::new(criteria.clone(), realtime, history))
            }
            (Err(error), _) | (Ok(_), Err(error)) => {
                info!(route = %criteria, elapsed_ms, leg = %error.leg(), "search failed");
                Err(error)
            }
        }
    }
}

/// Turns the joined outcome of one leg into a search result.
fn settle<T>(leg: SearchLeg, joined: Result<FetchResult<T>, JoinError>) -> SearchResult<T> {
    match joined {
        Ok(Ok(payload)) => Ok(payload),
        Ok(Err(error)) => {
            warn!(%leg, error = %error, "search leg failed");
            Err(SearchError::from_fetch(leg, error))
        }
        Err(error) => {
            warn!(%leg, error = %error, "search leg task did not complete");
            Err(SearchError::transport(leg))
        }
    }
}
