//! Core traits for seat selection.
//!
//! This module defines the SelectionStrategy trait implemented by the
//! single-seat and adjacent-seat searches.

use crate::scoring::Candidate;
use seat_map::{Preference, Result, SeatId, SeatLayout};

/// Picks seats out of a pool of scored, available candidates.
///
/// ## Design Note
/// - `Send + Sync` so a selector can be shared across concurrent requests
/// - Strategies only read their inputs; they never touch seat state
/// - Failures are returned as typed errors, never replaced with a weaker answer
pub trait SelectionStrategy: Send + Sync {
    /// Returns the name of this strategy (for logging/debugging)
    fn name(&self) -> &str;

    /// Choose `preference.seat_count` seats.
    ///
    /// # Arguments
    /// * `candidates` - Available seats with their scores
    /// * `layout` - Cabin geometry the candidates come from
    /// * `preference` - What the passenger asked for
    ///
    /// # Returns
    /// * `Ok(Vec<SeatId>)` - The chosen seats, in row/column order
    /// * `Err` - `InsufficientSeats`, `NoAdjacentSeatsAvailable` or `InvalidInput`
    fn select(
        &self,
        candidates: &[Candidate],
        layout: &SeatLayout,
        preference: &Preference,
    ) -> Result<Vec<SeatId>>;
}
