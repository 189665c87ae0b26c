//! # Search Session
//!
//! The results-view state machine.
//!
//! ```text
//! Idle ──begin──▶ Searching ──complete──▶ Success | Failed
//!   ▲                                          │
//!   └────────────── clear / begin ─────────────┘
//! ```
//!
//! Every [`SearchSession::begin`] and [`SearchSession::clear`] bumps a
//! generation counter. A completion carrying an older generation is
//! dropped, so the most recently started search always wins even when an
//! earlier one finishes later.

use crate::application::error::{SearchError, SearchResult};
use crate::application::services::search_orchestrator::SearchOrchestrator;
use crate::domain::entities::{OfferCard, ResultBundle};
use crate::domain::services::build_cards;
use crate::domain::value_objects::SearchCriteria;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

/// Normalized result of a successful search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// Criteria echoed back from the search.
    pub criteria: SearchCriteria,
    /// Smiles, Azul and History cards, in that order.
    pub cards: Vec<OfferCard>,
}

impl SearchOutcome {
    /// Normalizes a bundle into cards.
    #[must_use]
    pub fn from_bundle(bundle: &ResultBundle) -> Self {
        Self {
            criteria: bundle.criteria.clone(),
            cards: build_cards(Some(bundle)),
        }
    }
}

/// What the results view should show.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// No search submitted yet, or the last one was cleared.
    #[default]
    Idle,
    /// A search is in flight.
    Searching {
        /// Criteria being searched.
        criteria: SearchCriteria,
    },
    /// The latest search succeeded.
    Success(SearchOutcome),
    /// The latest search failed.
    Failed(SearchError),
}

impl SearchState {
    /// Returns true while a search is in flight.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        matches!(self, Self::Searching { .. })
    }

    /// Returns the outcome of a successful search.
    #[must_use]
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        match self {
            Self::Success(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns the error of a failed search.
    #[must_use]
    pub fn error(&self) -> Option<&SearchError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Handle for one started search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    criteria: SearchCriteria,
}

impl SearchTicket {
    /// Returns the generation this search was started in.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the criteria being searched.
    #[must_use]
    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }
}

#[derive(Debug, Default)]
struct SessionInner {
    generation: u64,
    state: SearchState,
}

/// Owns the current search state and drives searches through it.
#[derive(Debug)]
pub struct SearchSession {
    orchestrator: SearchOrchestrator,
    inner: Mutex<SessionInner>,
}

impl SearchSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new(orchestrator: SearchOrchestrator) -> Self {
        Self {
            orchestrator,
            inner: Mutex::new(SessionInner::default()),
        }
    }

    /// Moves to `Searching` and returns the ticket for this search.
    pub fn begin(&self, criteria: SearchCriteria) -> SearchTicket {
        let mut inner = self.inner.lock();
        inner.generation = inner.generation.wrapping_add(1);
        inner.state = SearchState::Searching {
            criteria: criteria.clone(),
        };
        SearchTicket {
            generation: inner.generation,
            criteria,
        }
    }

    /// Records the result of a search.
    ///
    /// Returns `false` and leaves the state untouched if a newer search was
    /// started or the session was cleared since `ticket` was issued.
    pub fn complete(&self, ticket: &SearchTicket, result: SearchResult<ResultBundle>) -> bool {
        let next = match result {
            Ok(bundle) => SearchState::Success(SearchOutcome::from_bundle(&bundle)),
            Err(error) => SearchState::Failed(error),
        };

        let mut inner = self.inner.lock();
        if inner.generation != ticket.generation {
            debug!(
                ticket = ticket.generation,
                current = inner.generation,
                "discarding stale search result"
            );
            return false;
        }
        inner.state = next;
        true
    }

    /// Returns to `Idle`, discarding any in-flight result.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.generation = inner.generation.wrapping_add(1);
        inner.state = SearchState::Idle;
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.inner.lock().state.clone()
    }

    /// Returns the current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.inner.lock().generation
    }

    /// Runs a full search and returns the resulting state.
    ///
    /// If a newer search superseded this one, the returned state is that of
    /// the newer search.
    pub async fn search(&self, criteria: SearchCriteria) -> SearchState {
        let ticket = self.begin(criteria);
        let result = self.orchestrator.run_search(ticket.criteria()).await;
        self.complete(&ticket, result);
        self.state()
    }
}
