//! Command-line front end: validates the form, runs one search, prints the
//! results view (or JSON with `--json`).

use anyhow::Context;
use clap::Parser;
use fare_compare::api::form::{DEFAULT_DESTINATION, DEFAULT_ORIGIN};
use fare_compare::api::{SearchForm, render_state};
use fare_compare::application::services::{SearchOrchestrator, SearchSession, SearchState};
use fare_compare::infrastructure::config::AppConfig;
use fare_compare::infrastructure::logging;
use fare_compare::infrastructure::providers::FareApiClient;
use serde_json::json;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "fare-compare", version, about = "Compare round-trip fares in miles and cash")]
struct Args {
    /// Origin airport (IATA code).
    #[arg(long, default_value = DEFAULT_ORIGIN)]
    origin: String,

    /// Destination airport (IATA code).
    #[arg(long, default_value = DEFAULT_DESTINATION)]
    destination: String,

    /// Departure date, YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    departure: Option<String>,

    /// Return date, YYYY-MM-DD. Defaults to three days after today.
    #[arg(long = "return")]
    return_date: Option<String>,

    /// Number of adult passengers (1-9).
    #[arg(long, default_value_t = 1)]
    adults: u8,

    /// Swap origin and destination.
    #[arg(long)]
    swap: bool,

    /// Print the outcome as JSON.
    #[arg(long)]
    json: bool,

    /// Override `api.base_url`.
    #[arg(long)]
    base_url: Option<String>,
}

impl Args {
    fn into_form(self) -> SearchForm {
        let defaults = SearchForm::default();
        let mut form = SearchForm {
            origin: self.origin,
            destination: self.destination,
            departure_date: self.departure.unwrap_or(defaults.departure_date),
            return_date: self.return_date.unwrap_or(defaults.return_date),
            adults: self.adults,
        };
        if self.swap {
            form.swap_directions();
        }
        form
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let mut config = AppConfig::load().context("failed to load configuration")?;
    if let Some(base_url) = args.base_url.clone() {
        config.api.base_url = base_url;
        config.validate()?;
    }
    logging::init(&config.logging)?;

    let json_output = args.json;
    let form = args.into_form();

    let client = FareApiClient::from_config(&config.api)?;
    let session = SearchSession::new(SearchOrchestrator::new(Arc::new(client)));
    let state = form.submit(&session).await.context("invalid search")?;

    if json_output {
        let value = match &state {
            SearchState::Failed(error) => json!({
                "error": error.message(),
                "leg": error.leg(),
                "status": error.status(),
            }),
            other => serde_json::to_value(other.outcome())?,
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", render_state(&state));
    }

    Ok(if state.error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
