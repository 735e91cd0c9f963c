//! Preference scoring for seats.
//!
//! A seat's score is the sum of the weights of every attribute the passenger
//! asked for and the seat actually has. Weights are fixed:
//! window 10, extra legroom 15, exit-row proximity 12 (max 37).

use rayon::prelude::*;
use seat_map::{Preference, Seat, SeatId};

pub const WINDOW_WEIGHT: u32 = 10;
pub const EXTRA_LEGROOM_WEIGHT: u32 = 15;
pub const EXIT_ROW_WEIGHT: u32 = 12;

/// Highest score any seat can reach
pub const MAX_SCORE: u32 = WINDOW_WEIGHT + EXTRA_LEGROOM_WEIGHT + EXIT_ROW_WEIGHT;

/// Score a single seat against a preference.
///
/// Pure function of the seat's attributes and the preference flags. Booking
/// state is not looked at here; see `PreferenceScorer::score_seats`.
pub fn score_seat(seat: &Seat, preference: &Preference) -> u32 {
    let mut score = 0;
    if preference.wants_window && seat.is_window {
        score += WINDOW_WEIGHT;
    }
    if preference.wants_extra_legroom && seat.has_extra_legroom {
        score += EXTRA_LEGROOM_WEIGHT;
    }
    if preference.wants_exit_row_proximity && seat.is_exit_row {
        score += EXIT_ROW_WEIGHT;
    }
    score
}

/// An available seat together with its score.
///
/// This is what the selection strategies rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub seat: SeatId,
    pub score: u32,
}

impl Candidate {
    pub fn new(seat: SeatId, score: u32) -> Self {
        Self { seat, score }
    }
}

/// Scores a request's seat collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceScorer;

impl PreferenceScorer {
    pub fn new() -> Self {
        Self
    }

    /// Return the seats with `recommendation_score` filled in.
    ///
    /// Takes ownership and hands back a new collection in the same order.
    /// Booked seats are never candidates, so their score is reset to 0.
    pub fn score_seats(&self, seats: Vec<Seat>, preference: &Preference) -> Vec<Seat> {
        seats
            .into_par_iter()
            .map(|mut seat| {
                seat.recommendation_score = if seat.is_available() {
                    score_seat(&seat, preference)
                } else {
                    0
                };
                seat
            })
            .collect()
    }

    /// Available seats of an already scored collection
    pub fn candidates(&self, seats: &[Seat]) -> Vec<Candidate> {
        seats
            .iter()
            .filter(|seat| seat.is_available())
            .map(|seat| Candidate::new(seat.id, seat.recommendation_score))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seat_map::SeatLayout;

    fn seat_with(window: bool, legroom: bool, exit: bool) -> Seat {
        let mut seat = Seat::new(SeatId::new(1, 0));
        seat.is_window = window;
        seat.has_extra_legroom = legroom;
        seat.is_exit_row = exit;
        seat
    }

    fn wants_everything() -> Preference {
        Preference::new(1)
            .with_window(true)
            .with_extra_legroom(true)
            .with_exit_row_proximity(true)
    }

    #[test]
    fn test_weights() {
        let pref = wants_everything();
        assert_eq!(score_seat(&seat_with(false, false, false), &pref), 0);
        assert_eq!(score_seat(&seat_with(true, false, false), &pref), 10);
        assert_eq!(score_seat(&seat_with(false, true, false), &pref), 15);
        assert_eq!(score_seat(&seat_with(false, false, true), &pref), 12);
        assert_eq!(score_seat(&seat_with(true, true, true), &pref), MAX_SCORE);
        assert_eq!(MAX_SCORE, 37);
    }

    #[test]
    fn test_unwanted_attributes_score_nothing() {
        let pref = Preference::new(1).with_window(true);
        assert_eq!(score_seat(&seat_with(false, true, true), &pref), 0);
        assert_eq!(score_seat(&seat_with(true, true, true), &pref), WINDOW_WEIGHT);
    }

    #[test]
    fn test_adding_an_attribute_never_lowers_the_score() {
        let flags = [false, true];
        for pref_w in flags {
            for pref_l in flags {
                for pref_e in flags {
                    let pref = Preference::new(1)
                        .with_window(pref_w)
                        .with_extra_legroom(pref_l)
                        .with_exit_row_proximity(pref_e);
                    for w in flags {
                        for l in flags {
                            for e in flags {
                                let base = score_seat(&seat_with(w, l, e), &pref);
                                assert!(score_seat(&seat_with(true, l, e), &pref) >= base);
                                assert!(score_seat(&seat_with(w, true, e), &pref) >= base);
                                assert!(score_seat(&seat_with(w, l, true), &pref) >= base);
                                assert!(base <= MAX_SCORE);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_score_seats_skips_booked_and_keeps_order() {
        let layout = SeatLayout::new(2, 4).unwrap();
        let mut seats = layout.generate_seats();
        seats[0].is_booked = true;
        seats[0].recommendation_score = 99;

        let scored = PreferenceScorer::new().score_seats(seats.clone(), &wants_everything());

        let ids: Vec<SeatId> = scored.iter().map(|s| s.id).collect();
        let original: Vec<SeatId> = seats.iter().map(|s| s.id).collect();
        assert_eq!(ids, original);

        // 1A is booked, 1D is window + legroom + exit row
        assert_eq!(scored[0].recommendation_score, 0);
        assert_eq!(scored[3].recommendation_score, 37);
        // 2B: exit row only (every row of a 2-row cabin is an exit row)
        assert_eq!(scored[5].recommendation_score, 12);
    }

    #[test]
    fn test_candidates_exclude_booked_seats() {
        let layout = SeatLayout::new(1, 4).unwrap();
        let mut seats = layout.generate_seats();
        seats[1].is_booked = true;

        let scorer = PreferenceScorer::new();
        let scored = scorer.score_seats(seats, &Preference::new(1).with_window(true));
        let candidates = scorer.candidates(&scored);

        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().all(|c| c.seat != SeatId::new(1, 1)));
        assert_eq!(candidates[0], Candidate::new(SeatId::new(1, 0), 10));
    }
}
