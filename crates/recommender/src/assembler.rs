//! Seat map assembly.
//!
//! Last step of a request: flag the chosen seats and wrap the whole cabin in
//! a `SeatMap`. The full map is always returned, not just the chosen seats.

use seat_map::{Seat, SeatId, SeatLayout, SeatMap};
use std::collections::HashSet;

/// Build the response seat map.
///
/// Seats whose id is in `chosen` get `is_recommended = true`, every other
/// seat gets `false`. Seat order is kept as given.
pub fn assemble(layout: &SeatLayout, seats: Vec<Seat>, chosen: &[SeatId]) -> SeatMap {
    let chosen: HashSet<SeatId> = chosen.iter().copied().collect();

    let seats = seats
        .into_iter()
        .map(|mut seat| {
            seat.is_recommended = chosen.contains(&seat.id);
            seat
        })
        .collect();

    SeatMap {
        rows: layout.rows(),
        seats_per_row: layout.seats_per_row(),
        seats,
    }
}
