//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! This module provides:
//! - [`SearchOrchestrator`]: Concurrent live quotes and history requests
//! - [`SearchSession`]: Results-view state with latest-search-wins semantics

pub mod search_orchestrator;
pub mod search_session;

pub use search_orchestrator::SearchOrchestrator;
pub use search_session::{SearchOutcome, SearchSession, SearchState, SearchTicket};
