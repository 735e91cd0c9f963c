//! # Recommendation Orchestrator
//!
//! Connects the recommendation core to the flight catalog:
//! 1. Look up the flight
//! 2. Take a snapshot of its layout and booked seats
//! 3. Run the core on that snapshot
//! 4. Log timing and return the seat map
//!
//! Catalog lookups happen before the core runs; the core itself never
//! blocks. Batches are spread over rayon's thread pool, one fresh seat
//! collection per request.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{info, instrument};

use crate::engine::{RecommenderConfig, SeatRecommender};
use seat_map::{Flight, FlightCatalog, FlightId, Preference, SeatMap, SeatMapError};

/// Returned when a request names a flight the catalog doesn't have
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Flight {0} not found")]
pub struct FlightNotFound(pub FlightId);

/// How a failed request should be reported to whoever asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    /// The flight doesn't exist
    NotFound,
    /// Invalid preference or constraints that can't be satisfied
    BadRequest,
    /// Anything else
    Internal,
}

impl ErrorStatus {
    /// Classify an error returned by the orchestrator
    pub fn of(err: &anyhow::Error) -> Self {
        if err.downcast_ref::<FlightNotFound>().is_some() {
            Self::NotFound
        } else if err
            .downcast_ref::<SeatMapError>()
            .is_some_and(SeatMapError::is_client_error)
        {
            Self::BadRequest
        } else {
            Self::Internal
        }
    }
}

/// Coordinates catalog lookups and recommendation requests.
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    catalog: Arc<FlightCatalog>,
    recommender: Arc<SeatRecommender>,
}

impl RecommendationOrchestrator {
    /// Create a new orchestrator
    ///
    /// # Arguments
    /// * `catalog` - Shared, read-only flight catalog
    /// * `config` - Policies for the underlying SeatRecommender
    pub fn new(catalog: Arc<FlightCatalog>, config: RecommenderConfig) -> Self {
        Self {
            catalog,
            recommender: Arc::new(SeatRecommender::new(config)),
        }
    }

    pub fn catalog(&self) -> &FlightCatalog {
        &self.catalog
    }

    fn flight(&self, flight_id: FlightId) -> Result<&Flight> {
        self.catalog
            .get_flight(flight_id)
            .ok_or_else(|| FlightNotFound(flight_id).into())
    }

    /// Seat map for a flight with bookings applied, no recommendation
    pub fn get_seat_map(&self, flight_id: FlightId) -> Result<SeatMap> {
        let flight = self.flight(flight_id)?;
        let layout = flight.layout()?;
        let map = self
            .recommender
            .seat_map(&layout, &flight.booked_set())
            .with_context(|| format!("Failed to build seat map for flight {}", flight_id))?;
        Ok(map)
    }

    /// Main entry point: recommend seats on a flight
    ///
    /// # Arguments
    /// * `flight_id` - The flight to seat the passenger(s) on
    /// * `preference` - The passenger's request
    ///
    /// # Returns
    /// The full seat map with the chosen seats flagged as recommended
    #[instrument(skip(self, preference), fields(seat_count = preference.seat_count))]
    pub fn get_recommendations(
        &self,
        flight_id: FlightId,
        preference: &Preference,
    ) -> Result<SeatMap> {
        let start_time = Instant::now();

        let flight = self.flight(flight_id)?;
        let layout = flight.layout()?;
        let booked = flight.booked_set();
        info!(
            "Recommending {} seat(s) on flight {} ({} -> {}), {} booked",
            preference.seat_count,
            flight_id,
            flight.origin,
            flight.destination,
            booked.len()
        );

        let map = self
            .recommender
            .recommend(&layout, &booked, preference)
            .with_context(|| format!("Failed to recommend seats for flight {}", flight_id))?;

        let chosen: Vec<String> = map.recommended().iter().map(|s| s.id.to_string()).collect();
        info!(
            "Recommended {} for flight {} in {:.2?}",
            chosen.join(", "),
            flight_id,
            start_time.elapsed()
        );
        Ok(map)
    }

    /// Run many independent requests in parallel.
    ///
    /// Results come back in request order. A failing request doesn't affect
    /// the others.
    pub fn recommend_batch(&self, requests: &[(FlightId, Preference)]) -> Vec<Result<SeatMap>> {
        let start_time = Instant::now();
        let results: Vec<Result<SeatMap>> = requests
            .par_iter()
            .map(|(flight_id, preference)| self.get_recommendations(*flight_id, preference))
            .collect();

        info!(
            "Processed batch of {} requests ({} failed) in {:.2?}",
            results.len(),
            results.iter().filter(|r| r.is_err()).count(),
            start_time.elapsed()
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn flight(id: FlightId, rows: u16, seats_per_row: u8, booked: &[&str]) -> Flight {
        Flight {
            id,
            origin: "LCY".to_string(),
            destination: "BUD".to_string(),
            departure_date: "2025-11-15".to_string(),
            return_date: None,
            rows,
            seats_per_row,
            booked_seats: booked.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    fn build_test_orchestrator() -> RecommendationOrchestrator {
        let mut catalog = FlightCatalog::new();
        catalog.insert_flight(flight(1, 2, 6, &["1C", "1D"]));
        catalog.insert_flight(flight(2, 1, 2, &["1A"]));
        catalog.insert_flight(flight(3, 2, 4, &["1B", "1C", "2B", "2C"]));
        RecommendationOrchestrator::new(Arc::new(catalog), RecommenderConfig::default())
    }

    // ============================================================================
    // Unit Tests
    // ============================================================================

    #[test]
    fn test_get_recommendations_for_known_flight() {
        let orchestrator = build_test_orchestrator();
        let map = orchestrator
            .get_recommendations(1, &Preference::new(1).with_window(true))
            .unwrap();

        let chosen: Vec<String> = map.recommended().iter().map(|s| s.id.to_string()).collect();
        assert_eq!(chosen, vec!["1A"]);
        assert!(map.get(&"1C".parse().unwrap()).unwrap().is_booked);
    }

    #[test]
    fn test_missing_flight_is_not_found() {
        let orchestrator = build_test_orchestrator();
        let err = orchestrator
            .get_recommendations(999, &Preference::new(1))
            .unwrap_err();

        assert_eq!(ErrorStatus::of(&err), ErrorStatus::NotFound);
        assert_eq!(err.to_string(), "Flight 999 not found");
    }

    #[test]
    fn test_core_failures_are_bad_requests() {
        let orchestrator = build_test_orchestrator();
        let pair = Preference::new(2).with_seats_together(true);

        let err = orchestrator.get_recommendations(2, &pair).unwrap_err();
        assert_eq!(ErrorStatus::of(&err), ErrorStatus::BadRequest);
        assert!(matches!(
            err.downcast_ref::<SeatMapError>(),
            Some(SeatMapError::InsufficientSeats { .. })
        ));

        let err = orchestrator.get_recommendations(3, &pair).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SeatMapError>(),
            Some(SeatMapError::NoAdjacentSeatsAvailable { .. })
        ));

        let err = orchestrator
            .get_recommendations(1, &Preference::new(3))
            .unwrap_err();
        assert_eq!(ErrorStatus::of(&err), ErrorStatus::BadRequest);
    }

    #[test]
    fn test_get_seat_map() {
        let orchestrator = build_test_orchestrator();
        let map = orchestrator.get_seat_map(3).unwrap();

        assert_eq!(map.seats.len(), 8);
        assert_eq!(map.available_count(), 4);
        assert!(map.recommended().is_empty());
        assert!(orchestrator.get_seat_map(42).is_err());
    }

    #[test]
    fn test_recommend_batch_keeps_request_order() {
        let orchestrator = build_test_orchestrator();
        let requests = vec![
            (1, Preference::new(1).with_window(true)),
            (999, Preference::new(1)),
            (3, Preference::new(2)),
            (2, Preference::new(1)),
        ];

        let results = orchestrator.recommend_batch(&requests);
        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());

        let separate = results[2].as_ref().unwrap();
        assert_eq!(separate.recommended().len(), 2);

        let single = results[3].as_ref().unwrap();
        let chosen: Vec<String> = single.recommended().iter().map(|s| s.id.to_string()).collect();
        assert_eq!(chosen, vec!["1B"]);
    }

    #[test]
    fn test_catalog_is_not_modified_by_requests() {
        let orchestrator = build_test_orchestrator();
        let before = orchestrator.catalog().get_flight(1).cloned();
        orchestrator
            .get_recommendations(1, &Preference::new(2).with_seats_together(true))
            .unwrap();
        assert_eq!(orchestrator.catalog().get_flight(1).cloned(), before);
    }
}
