//! The recommendation core.
//!
//! One request flows through:
//! 1. Generate the layout's seats
//! 2. Overlay the booked set
//! 3. Score available seats against the preference
//! 4. Select seats (single or adjacent)
//! 5. Assemble the full seat map with recommendations flagged
//!
//! Each call allocates its own seat collection and touches nothing shared,
//! so any number of requests can run in parallel on the same recommender.

use crate::assembler::assemble;
use pipeline::selection::AdjacentSeatsStrategy;
use pipeline::{PreferenceScorer, SeatSelector};
use seat_map::{
    BookedSet, BookingOverlay, Preference, Result, RowNumber, SeatLayout, SeatMap,
    UnknownSeatPolicy,
};
use tracing::{debug, instrument};

/// Policies for a SeatRecommender
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommenderConfig {
    /// How booked ids outside the layout are handled (default: ignore)
    pub unknown_seat_policy: UnknownSeatPolicy,
    /// Don't treat seats across the aisle as together (default: false)
    pub respect_aisle: bool,
}

/// Runs the full layout -> overlay -> score -> select -> assemble flow.
pub struct SeatRecommender {
    config: RecommenderConfig,
    overlay: BookingOverlay,
    scorer: PreferenceScorer,
    selector: SeatSelector,
}

impl SeatRecommender {
    pub fn new(config: RecommenderConfig) -> Self {
        let selector = SeatSelector::new().with_adjacency_strategy(
            AdjacentSeatsStrategy::new().respect_aisle(config.respect_aisle),
        );

        Self {
            config,
            overlay: BookingOverlay::new(config.unknown_seat_policy),
            scorer: PreferenceScorer::new(),
            selector,
        }
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Seat map with bookings applied and nothing recommended
    pub fn seat_map(&self, layout: &SeatLayout, booked: &BookedSet) -> Result<SeatMap> {
        let seats = self.overlay.apply(layout.generate_seats(), booked)?;
        Ok(assemble(layout, seats, &[]))
    }

    /// Recommend seats for one request.
    ///
    /// # Returns
    /// * `Ok(SeatMap)` - Every seat of the cabin, with booked and recommended flags
    /// * `Err(InvalidInput)` - Bad seat count, or unknown booked ids under the reject policy
    /// * `Err(InsufficientSeats)` - Fewer free seats than requested
    /// * `Err(NoAdjacentSeatsAvailable)` - Togetherness required and impossible
    #[instrument(
        skip(self, booked),
        fields(rows = layout.rows(), seats_per_row = layout.seats_per_row(), booked = booked.len())
    )]
    pub fn recommend(
        &self,
        layout: &SeatLayout,
        booked: &BookedSet,
        preference: &Preference,
    ) -> Result<SeatMap> {
        preference.validate()?;

        let seats = self.overlay.apply(layout.generate_seats(), booked)?;
        let seats = self.scorer.score_seats(seats, preference);
        let candidates = self.scorer.candidates(&seats);
        debug!("{} of {} seats available", candidates.len(), seats.len());

        let chosen = self.selector.select(&candidates, layout, preference)?;
        Ok(assemble(layout, seats, &chosen))
    }
}

impl Default for SeatRecommender {
    fn default() -> Self {
        Self::new(RecommenderConfig::default())
    }
}

/// Recommend seats using the default policies.
///
/// Validates the layout dimensions, then runs a default `SeatRecommender`.
pub fn recommend(
    rows: RowNumber,
    seats_per_row: u8,
    booked: &BookedSet,
    preference: &Preference,
) -> Result<SeatMap> {
    let layout = SeatLayout::new(rows, seats_per_row)?;
    SeatRecommender::default().recommend(&layout, booked, preference)
}
