//! # Infrastructure Layer
//!
//! Adapters to the outside world.
//!
//! - [`providers`]: fare API client behind the [`providers::FareGateway`] port
//! - [`config`]: layered settings
//! - [`logging`]: tracing subscriber setup

pub mod config;
pub mod logging;
pub mod providers;
