//! The SeatSelector decides how a request's seats are chosen.
//!
//! Selection runs as a short state machine:
//!
//! ```text
//! Start -> ValidateCount -> { SingleSelect | AdjacencySearch } -> { Success | Fail }
//! ```
//!
//! There are no retries here. If adjacency was required and can't be met the
//! request fails; it never falls back to seats that aren't together.

use crate::scoring::Candidate;
use crate::selection::{AdjacentSeatsStrategy, HighestScoreStrategy};
use crate::traits::SelectionStrategy;
use seat_map::{Preference, Result, SeatId, SeatLayout, SeatMapError};
use tracing::{debug, instrument};

/// Which branch of the state machine a request takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Best individual seats, together or not
    SingleSelect,
    /// Best block of adjacent seats in one row
    AdjacencySearch,
}

impl SelectionMode {
    pub fn for_preference(preference: &Preference) -> Self {
        if preference.requires_adjacency() {
            Self::AdjacencySearch
        } else {
            Self::SingleSelect
        }
    }
}

/// Routes a request to the right selection strategy.
///
/// ## Usage
/// ```ignore
/// let selector = SeatSelector::new()
///     .with_adjacency_strategy(AdjacentSeatsStrategy::new().respect_aisle(true));
///
/// let chosen = selector.select(&candidates, &layout, &preference)?;
/// ```
pub struct SeatSelector {
    single: Box<dyn SelectionStrategy>,
    adjacent: Box<dyn SelectionStrategy>,
}

impl SeatSelector {
    /// Selector with the default strategies
    pub fn new() -> Self {
        Self {
            single: Box::new(HighestScoreStrategy),
            adjacent: Box::new(AdjacentSeatsStrategy::new()),
        }
    }

    /// Replace the strategy used when seats don't need to be together
    pub fn with_single_strategy(mut self, strategy: impl SelectionStrategy + 'static) -> Self {
        self.single = Box::new(strategy);
        self
    }

    /// Replace the strategy used when seats must be together
    pub fn with_adjacency_strategy(mut self, strategy: impl SelectionStrategy + 'static) -> Self {
        self.adjacent = Box::new(strategy);
        self
    }

    /// Choose seats for a request.
    ///
    /// # Arguments
    /// * `candidates` - Available, scored seats
    /// * `layout` - Cabin geometry
    /// * `preference` - The passenger's request
    ///
    /// # Returns
    /// * `Ok(Vec<SeatId>)` - Exactly `preference.seat_count` seats
    /// * `Err(InvalidInput)` - Seat count outside 1..=2
    /// * `Err(InsufficientSeats)` - Fewer available seats than requested,
    ///   checked before any adjacency search
    /// * `Err(NoAdjacentSeatsAvailable)` - Enough seats, none together
    #[instrument(skip(self, candidates, layout), fields(available = candidates.len()))]
    pub fn select(
        &self,
        candidates: &[Candidate],
        layout: &SeatLayout,
        preference: &Preference,
    ) -> Result<Vec<SeatId>> {
        preference.validate()?;

        let requested = preference.seat_count as usize;
        if candidates.len() < requested {
            return Err(SeatMapError::InsufficientSeats {
                requested,
                available: candidates.len(),
            });
        }

        let strategy = match SelectionMode::for_preference(preference) {
            SelectionMode::SingleSelect => &self.single,
            SelectionMode::AdjacencySearch => &self.adjacent,
        };
        debug!("Selecting {} seat(s) with {}", requested, strategy.name());

        let chosen = strategy.select(candidates, layout, preference)?;
        debug!(
            "{} chose {}",
            strategy.name(),
            chosen
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(chosen)
    }
}

impl Default for SeatSelector {
    fn default() -> Self {
        Self::new()
    }
}
