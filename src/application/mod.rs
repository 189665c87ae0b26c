//! # Application Layer
//!
//! Use cases built on the domain and the fare gateway port.

pub mod error;
pub mod services;

pub use error::{SearchError, SearchResult};
