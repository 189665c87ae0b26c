//! # fare-compare
//!
//! Round-trip fare comparison across Smiles, Azul and a historical price
//! archive.
//!
//! A search fans out to two upstream endpoints concurrently, live quotes
//! and route history, joins them into a [`ResultBundle`], and normalizes
//! the bundle into exactly three [`OfferCard`]s.
//!
//! ## Layers
//!
//! - [`domain`]: criteria, payload shapes, cards, and the normalizer
//! - [`application`]: the search orchestrator and session state machine
//! - [`infrastructure`]: the HTTP fare gateway, configuration, logging
//! - [`api`]: the search form and results view
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use fare_compare::api::{SearchForm, render_state};
//! use fare_compare::application::services::{SearchOrchestrator, SearchSession};
//! use fare_compare::infrastructure::providers::FareApiClient;
//!
//! let client = FareApiClient::new("http://localhost:8000", None)?;
//! let session = SearchSession::new(SearchOrchestrator::new(Arc::new(client)));
//! let state = SearchForm::default().submit(&session).await?;
//! println!("{}", render_state(&state));
//! ```
//!
//! [`ResultBundle`]: domain::entities::ResultBundle
//! [`OfferCard`]: domain::entities::OfferCard

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
