//! # Logging
//!
//! Installs the global `tracing` subscriber.
//!
//! `RUST_LOG` wins over the configured filter. Output goes to stderr so
//! that `--json` results on stdout stay machine-readable.

use crate::infrastructure::config::LoggingConfig;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Error raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// The rejected directive.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the filter from `RUST_LOG`, falling back to `config.filter`.
///
/// # Errors
///
/// Returns `LoggingError::InvalidFilter` if the fallback directive is malformed.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|e| LoggingError::InvalidFilter {
            filter: config.filter.clone(),
            reason: e.to_string(),
        }),
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns `LoggingError` if the filter is malformed or a subscriber is
/// already installed.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = env_filter(config)?;

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}
