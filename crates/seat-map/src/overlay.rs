//! Booking state overlay.
//!
//! Marks seats from a `BookedSet` as booked on a freshly generated seat list.
//! The booked set comes from persistence, which may know about layouts the
//! generator doesn't, so entries that don't match a seat are handled by an
//! explicit policy instead of being guessed at.

use crate::error::{InvalidInput, Result};
use crate::parser::parse_seat_id;
use crate::types::{BookedSet, Seat, SeatId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// What to do with booked identifiers that match no seat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSeatPolicy {
    /// Log and skip them
    #[default]
    Ignore,
    /// Fail with `InvalidInput::UnknownBookedSeats`
    Reject,
}

/// Applies a booked set to a seat list.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingOverlay {
    policy: UnknownSeatPolicy,
}

impl BookingOverlay {
    pub fn new(policy: UnknownSeatPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnknownSeatPolicy {
        self.policy
    }

    /// Mark every seat whose id is in `booked` as booked.
    ///
    /// Seats not in the set are explicitly set to unbooked, so the result
    /// only reflects this booked set. Identifiers that fail to parse count as
    /// unknown, same as well-formed ids outside the layout.
    pub fn apply(&self, mut seats: Vec<Seat>, booked: &BookedSet) -> Result<Vec<Seat>> {
        let positions: HashMap<SeatId, usize> = seats
            .iter()
            .enumerate()
            .map(|(idx, seat)| (seat.id, idx))
            .collect();

        let mut booked_positions = Vec::with_capacity(booked.len());
        let mut unknown = Vec::new();
        for entry in booked.iter() {
            match parse_seat_id(entry).ok().and_then(|id| positions.get(&id)) {
                Some(&idx) => booked_positions.push(idx),
                None => unknown.push(entry.to_string()),
            }
        }

        if !unknown.is_empty() {
            match self.policy {
                UnknownSeatPolicy::Reject => {
                    return Err(InvalidInput::UnknownBookedSeats { seats: unknown }.into());
                }
                UnknownSeatPolicy::Ignore => {
                    warn!(
                        "Ignoring {} booked seat(s) not present in layout: {}",
                        unknown.len(),
                        unknown.join(", ")
                    );
                }
            }
        }

        for seat in seats.iter_mut() {
            seat.is_booked = false;
        }
        for idx in booked_positions {
            seats[idx].is_booked = true;
        }

        debug!(
            "Booking overlay applied: {} of {} seats booked",
            seats.iter().filter(|s| s.is_booked).count(),
            seats.len()
        );
        Ok(seats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeatMapError;
    use crate::types::SeatLayout;

    fn seats() -> Vec<Seat> {
        SeatLayout::new(2, 6).unwrap().generate_seats()
    }

    fn booked_ids(seats: &[Seat]) -> Vec<String> {
        seats
            .iter()
            .filter(|s| s.is_booked)
            .map(|s| s.id.to_string())
            .collect()
    }

    #[test]
    fn test_marks_only_booked_seats() {
        let booked: BookedSet = ["1C", "1D", "2F"].into_iter().collect();
        let result = BookingOverlay::default().apply(seats(), &booked).unwrap();

        assert_eq!(booked_ids(&result), vec!["1C", "1D", "2F"]);
        assert_eq!(result.len(), 12);
    }

    #[test]
    fn test_empty_booked_set_leaves_everything_free() {
        let result = BookingOverlay::default()
            .apply(seats(), &BookedSet::new())
            .unwrap();
        assert!(result.iter().all(|s| !s.is_booked));
    }

    #[test]
    fn test_clears_stale_booked_flags() {
        let mut input = seats();
        input[0].is_booked = true;

        let booked: BookedSet = ["2A"].into_iter().collect();
        let result = BookingOverlay::default().apply(input, &booked).unwrap();
        assert_eq!(booked_ids(&result), vec!["2A"]);
    }

    #[test]
    fn test_ignore_policy_skips_unknown_ids() {
        let booked: BookedSet = ["1A", "9A", "1Z", "garbage"].into_iter().collect();
        let result = BookingOverlay::new(UnknownSeatPolicy::Ignore)
            .apply(seats(), &booked)
            .unwrap();
        assert_eq!(booked_ids(&result), vec!["1A"]);
    }

    #[test]
    fn test_reject_policy_reports_unknown_ids() {
        let booked: BookedSet = ["1A", "9A", "garbage"].into_iter().collect();
        let err = BookingOverlay::new(UnknownSeatPolicy::Reject)
            .apply(seats(), &booked)
            .unwrap_err();

        match err {
            SeatMapError::InvalidInput(InvalidInput::UnknownBookedSeats { seats }) => {
                assert_eq!(seats, vec!["9A".to_string(), "garbage".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_lowercase_entries_match() {
        let booked: BookedSet = ["2b"].into_iter().collect();
        let result = BookingOverlay::new(UnknownSeatPolicy::Reject)
            .apply(seats(), &booked)
            .unwrap();
        assert_eq!(booked_ids(&result), vec!["2B"]);
    }

    #[test]
    fn test_zero_padded_rows_are_unknown() {
        let booked: BookedSet = ["01A", "2C"].into_iter().collect();
        let err = BookingOverlay::new(UnknownSeatPolicy::Reject)
            .apply(seats(), &booked)
            .unwrap_err();
        assert_eq!(
            err,
            SeatMapError::InvalidInput(InvalidInput::UnknownBookedSeats {
                seats: vec!["01A".to_string()]
            })
        );

        let result = BookingOverlay::default().apply(seats(), &booked).unwrap();
        assert_eq!(booked_ids(&result), vec!["2C"]);
    }
}
