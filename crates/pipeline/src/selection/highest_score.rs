//! Pick the best individually scored seats.
//!
//! Used for single-seat requests and for multi-seat requests that don't need
//! the seats to be together.

use crate::scoring::Candidate;
use crate::traits::SelectionStrategy;
use seat_map::{Preference, Result, SeatId, SeatLayout, SeatMapError};

/// Selects the `seat_count` highest scoring candidates.
///
/// ## Algorithm
/// 1. Sort by score descending
/// 2. Break ties by seat id ascending (row, then column)
/// 3. Take the first `seat_count`
///
/// The tie-break makes the result reproducible: with equal scores "1A" wins
/// over "1F", and "1F" over "2A".
pub struct HighestScoreStrategy;

impl SelectionStrategy for HighestScoreStrategy {
    fn name(&self) -> &str {
        "HighestScoreStrategy"
    }

    fn select(
        &self,
        candidates: &[Candidate],
        _layout: &SeatLayout,
        preference: &Preference,
    ) -> Result<Vec<SeatId>> {
        preference.validate()?;
        let count = preference.seat_count as usize;

        if candidates.len() < count {
            return Err(SeatMapError::InsufficientSeats {
                requested: count,
                available: candidates.len(),
            });
        }

        let mut ranked: Vec<&Candidate> = candidates.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.seat.cmp(&b.seat)));

        let mut chosen: Vec<SeatId> = ranked.into_iter().take(count).map(|c| c.seat).collect();
        chosen.sort();
        Ok(chosen)
    }
}
