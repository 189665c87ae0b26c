//! # Search Form
//!
//! Raw user input for a search, validated into [`SearchCriteria`] before
//! anything reaches the network.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use fare_compare::api::form::SearchForm;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let mut form = SearchForm::with_defaults(today);
//! assert_eq!(form.return_date, "2025-03-04");
//!
//! form.swap_directions();
//! assert_eq!((form.origin.as_str(), form.destination.as_str()), ("REC", "GRU"));
//! assert!(form.can_search());
//! ```

use crate::application::services::{SearchSession, SearchState};
use crate::domain::errors::{ValidationError, ValidationResult};
use crate::domain::value_objects::{AirportCode, DATE_FORMAT, MIN_ADULTS, SearchCriteria};
use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Default origin airport.
pub const DEFAULT_ORIGIN: &str = "GRU";

/// Default destination airport.
pub const DEFAULT_DESTINATION: &str = "REC";

/// Default trip length in days.
pub const DEFAULT_TRIP_DAYS: u64 = 3;

/// Editable search input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    /// Origin airport code.
    pub origin: String,
    /// Destination airport code.
    pub destination: String,
    /// Departure date, `YYYY-MM-DD`.
    pub departure_date: String,
    /// Return date, `YYYY-MM-DD`.
    pub return_date: String,
    /// Number of adult passengers.
    pub adults: u8,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::with_defaults(Utc::now().date_naive())
    }
}

impl SearchForm {
    /// Creates the initial form: GRU to REC, departing `today`, returning
    /// three days later, one adult.
    #[must_use]
    pub fn with_defaults(today: NaiveDate) -> Self {
        let return_date = today
            .checked_add_days(Days::new(DEFAULT_TRIP_DAYS))
            .unwrap_or(today);
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            destination: DEFAULT_DESTINATION.to_string(),
            departure_date: today.format(DATE_FORMAT).to_string(),
            return_date: return_date.format(DATE_FORMAT).to_string(),
            adults: MIN_ADULTS,
        }
    }

    /// Returns true if submitting would start a search.
    #[must_use]
    pub fn can_search(&self) -> bool {
        self.to_criteria().is_ok()
    }

    /// Exchanges origin and destination.
    pub fn swap_directions(&mut self) {
        std::mem::swap(&mut self.origin, &mut self.destination);
    }

    /// Validates the input.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first offending field, checked
    /// in form order.
    pub fn to_criteria(&self) -> ValidationResult<SearchCriteria> {
        let origin = airport("origin", &self.origin)?;
        let destination = airport("destination", &self.destination)?;
        let departure_date = date("departure_date", &self.departure_date)?;
        let return_date = date("return_date", &self.return_date)?;
        SearchCriteria::new(origin, destination, departure_date, return_date, self.adults)
    }

    /// Validates the input and runs the search on `session`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` without touching the session if the
    /// input is invalid.
    pub async fn submit(&self, session: &SearchSession) -> ValidationResult<SearchState> {
        let criteria = self.to_criteria()?;
        Ok(session.search(criteria).await)
    }
}

fn airport(field: &'static str, value: &str) -> ValidationResult<AirportCode> {
    if value.trim().is_empty() {
        return Err(ValidationError::missing_field(field));
    }
    AirportCode::new(value)
}

fn date(field: &'static str, value: &str) -> ValidationResult<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::missing_field(field));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ValidationError::invalid_date(field, value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::services::SearchOrchestrator;
    use crate::domain::entities::{HistoryPayload, RealtimePayload};
    use crate::infrastructure::providers::{FareGateway, FetchResult};
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingGateway {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl FareGateway for CountingGateway {
        async fn fetch_realtime(&self, _criteria: &SearchCriteria) -> FetchResult<RealtimePayload> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(RealtimePayload::default())
        }

        async fn fetch_history(
            &self,
            _origin: &AirportCode,
            _destination: &AirportCode,
        ) -> FetchResult<HistoryPayload> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HistoryPayload::default())
        }
    }

    fn counting_session() -> (Arc<CountingGateway>, SearchSession) {
        let gateway = Arc::new(CountingGateway::default());
        let session = SearchSession::new(SearchOrchestrator::new(gateway.clone()));
        (gateway, session)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 30).unwrap()
    }

    #[test]
    fn defaults() {
        let form = SearchForm::with_defaults(today());
        assert_eq!(form.origin, "GRU");
        assert_eq!(form.destination, "REC");
        assert_eq!(form.departure_date, "2025-12-30");
        assert_eq!(form.return_date, "2026-01-02");
        assert_eq!(form.adults, 1);
        assert!(form.can_search());
    }

    #[test]
    fn swap_twice_restores_route() {
        let mut form = SearchForm::with_defaults(today());
        form.swap_directions();
        form.swap_directions();
        assert_eq!(form, SearchForm::with_defaults(today()));
    }

    #[test]
    fn missing_fields_are_named() {
        let mut form = SearchForm::with_defaults(today());
        form.destination = "  ".to_string();
        assert_eq!(
            form.to_criteria().unwrap_err(),
            ValidationError::missing_field("destination")
        );

        let mut form = SearchForm::with_defaults(today());
        form.return_date.clear();
        assert_eq!(
            form.to_criteria().unwrap_err().field(),
            Some("return_date")
        );
        assert!(!form.can_search());
    }

    #[test]
    fn rejects_malformed_input() {
        let mut form = SearchForm::with_defaults(today());
        form.origin = "GRUX".to_string();
        assert!(matches!(
            form.to_criteria(),
            Err(ValidationError::InvalidAirportCode { .. })
        ));

        let mut form = SearchForm::with_defaults(today());
        form.departure_date = "30/12/2025".to_string();
        assert_eq!(
            form.to_criteria().unwrap_err(),
            ValidationError::invalid_date("departure_date", "30/12/2025")
        );
    }

    #[test]
    fn adults_capped() {
        let mut form = SearchForm::with_defaults(today());
        form.adults = 10;
        assert!(matches!(
            form.to_criteria(),
            Err(ValidationError::AdultsOutOfRange { value: 10, .. })
        ));
        form.adults = 0;
        assert!(!form.can_search());
    }

    #[test]
    fn same_day_return_allowed() {
        let mut form = SearchForm::with_defaults(today());
        form.return_date = form.departure_date.clone();
        assert!(form.can_search());
    }

    #[tokio::test]
    async fn submit_runs_search() {
        let (gateway, session) = counting_session();
        let form = SearchForm::with_defaults(today());

        let state = form.submit(&session).await.unwrap();

        assert_eq!(state.outcome().unwrap().cards.len(), 3);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
    }

    proptest! {
        #[test]
        fn return_before_departure_never_searches(offset in 0u64..4000, gap in 1u64..400) {
            let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
            let departure = base.checked_add_days(Days::new(offset + gap)).unwrap();
            let return_date = base.checked_add_days(Days::new(offset)).unwrap();
            let form = SearchForm {
                departure_date: departure.format(DATE_FORMAT).to_string(),
                return_date: return_date.format(DATE_FORMAT).to_string(),
                ..SearchForm::with_defaults(base)
            };
            let (gateway, session) = counting_session();

            let result = tokio_test::block_on(form.submit(&session));

            let rejected = matches!(result, Err(ValidationError::ReturnBeforeDeparture { .. }));
            prop_assert!(rejected, "return before departure must be rejected");
            prop_assert!(!form.can_search());
            prop_assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
            prop_assert_eq!(session.state(), SearchState::Idle);
        }
    }
}
