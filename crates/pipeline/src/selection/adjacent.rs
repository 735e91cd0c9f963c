//! Adjacent seat search.
//!
//! Finds the best block of seats that sit next to each other in one row.
//!
//! ## Algorithm
//! 1. Group available candidates by row (rows ascending)
//! 2. Sort each row by column
//! 3. Slide a window of `seat_count` seats across the row
//! 4. Keep a window only if its column indices are consecutive; free seats
//!    that merely follow each other in the sorted list are not enough
//! 5. Pick the window with the highest combined score; on ties the first one
//!    found wins, i.e. lowest row, then lowest starting column

use crate::scoring::Candidate;
use crate::traits::SelectionStrategy;
use seat_map::{Preference, Result, RowNumber, SeatId, SeatLayout, SeatMapError};
use std::collections::BTreeMap;
use tracing::debug;

/// Selects `seat_count` seats in consecutive columns of the same row.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentSeatsStrategy {
    respect_aisle: bool,
}

impl AdjacentSeatsStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Don't treat seats on opposite sides of the aisle as together (default: false)
    pub fn respect_aisle(mut self, respect: bool) -> Self {
        self.respect_aisle = respect;
        self
    }

    /// Whether a sorted window forms one unbroken block
    fn is_block(&self, window: &[&Candidate], layout: &SeatLayout) -> bool {
        window.windows(2).all(|pair| {
            let (left, right) = (pair[0].seat.column, pair[1].seat.column);
            right == left + 1 && !(self.respect_aisle && layout.crosses_aisle(left, right))
        })
    }
}

impl SelectionStrategy for AdjacentSeatsStrategy {
    fn name(&self) -> &str {
        "AdjacentSeatsStrategy"
    }

    fn select(
        &self,
        candidates: &[Candidate],
        layout: &SeatLayout,
        preference: &Preference,
    ) -> Result<Vec<SeatId>> {
        preference.validate()?;
        let group_size = preference.seat_count as usize;

        let mut by_row: BTreeMap<RowNumber, Vec<&Candidate>> = BTreeMap::new();
        for candidate in candidates {
            by_row.entry(candidate.seat.row).or_default().push(candidate);
        }

        let mut best: Option<(u32, Vec<SeatId>)> = None;
        for (row, mut seats) in by_row {
            seats.sort_by_key(|c| c.seat.column);
            seats.dedup_by_key(|c| c.seat.column);

            for window in seats.windows(group_size) {
                if !self.is_block(window, layout) {
                    continue;
                }
                let total: u32 = window.iter().map(|c| c.score).sum();
                if best.as_ref().is_none_or(|(best_total, _)| total > *best_total) {
                    debug!("New best block in row {} with score {}", row, total);
                    best = Some((total, window.iter().map(|c| c.seat).collect()));
                }
            }
        }

        best.map(|(_, seats)| seats)
            .ok_or(SeatMapError::NoAdjacentSeatsAvailable {
                requested: group_size,
            })
    }
}
