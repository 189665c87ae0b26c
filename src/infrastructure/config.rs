//! # Configuration
//!
//! Layered application settings.
//!
//! Sources, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. Optional `config/fare-compare.{toml,yaml,json}` file
//! 3. Environment variables prefixed with `FARE_COMPARE__`, nested keys
//!    separated by `__` (a `.env` file is read first when present)
//!
//! | Key | Env | Default |
//! |-----|-----|---------|
//! | `api.base_url` | `FARE_COMPARE__API__BASE_URL` | `http://localhost:8000` |
//! | `api.timeout_ms` | `FARE_COMPARE__API__TIMEOUT_MS` | unset |
//! | `logging.filter` | `FARE_COMPARE__LOGGING__FILTER` | `fare_compare=info` |
//! | `logging.json` | `FARE_COMPARE__LOGGING__JSON` | `false` |

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;
use thiserror::Error;

/// Default fare API location.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "fare_compare=info";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "FARE_COMPARE";

/// Optional configuration file, without extension.
pub const CONFIG_FILE: &str = "config/fare-compare";

/// Error raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The fare API base URL is unusable.
    #[error("invalid api.base_url '{url}': {reason}")]
    InvalidBaseUrl {
        /// The configured value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Fare API settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the fare API.
    pub base_url: String,
    /// Request timeout in milliseconds.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: None,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Fare API section.
    pub api: ApiConfig,
    /// Logging section.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration from the default file and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source is malformed and
    /// `ConfigError::InvalidBaseUrl` if the API URL is not http(s).
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();

        let builder = config::Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::build(builder)
    }

    /// Applies defaults, deserializes and validates.
    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings = builder
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("logging.filter", DEFAULT_LOG_FILTER)?
            .set_default("logging.json", false)?
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the API base URL is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.api.base_url;
        let parsed = reqwest::Url::parse(url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidBaseUrl {
                url: url.clone(),
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }
}
