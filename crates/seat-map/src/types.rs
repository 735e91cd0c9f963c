//! Core domain types for aircraft seat maps.
//!
//! This module defines the data structures that flow through a single
//! recommendation request:
//! - `SeatId` - row number plus column index, displayed as "12C"
//! - `Seat` - static attributes derived from the layout plus per-request state
//! - `SeatLayout` - cabin geometry (rows x seats per row)
//! - `Preference` - what the passenger wants
//! - `BookedSet` - seats already taken, as supplied by persistence
//! - `SeatMap` - the assembled result handed back to the caller
//!
//! Everything here is built fresh per request. Nothing is shared mutably
//! between requests.

use crate::error::{InvalidInput, Result, SeatMapError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// 1-based row number
pub type RowNumber = u16;

/// 0-based column index within a row (0 = 'A')
pub type ColumnIndex = u8;

// =============================================================================
// Seat Identity
// =============================================================================

/// Identity of a seat within a flight: row plus column.
///
/// Derived ordering is row first, then column. That order is the
/// deterministic tie-break used everywhere a choice between equally scored
/// seats has to be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatId {
    pub row: RowNumber,
    pub column: ColumnIndex,
}

impl SeatId {
    pub fn new(row: RowNumber, column: ColumnIndex) -> Self {
        Self { row, column }
    }

    /// Column letter, 'A' for column 0
    pub fn letter(&self) -> char {
        (b'A' + self.column) as char
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter())
    }
}

impl From<SeatId> for String {
    fn from(id: SeatId) -> Self {
        id.to_string()
    }
}

// =============================================================================
// Seat
// =============================================================================

/// A single seat in the cabin.
///
/// `is_window`, `is_aisle`, `is_exit_row` and `has_extra_legroom` are fixed by
/// the layout. `is_booked`, `is_recommended` and `recommendation_score` are
/// filled in by the overlay, the selector and the scorer respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    #[serde(rename = "seatNumber")]
    pub id: SeatId,
    pub is_window: bool,
    pub is_aisle: bool,
    pub is_exit_row: bool,
    pub has_extra_legroom: bool,
    pub is_booked: bool,
    pub is_recommended: bool,
    pub recommendation_score: u32,
}

impl Seat {
    /// Create a seat with no attributes set
    pub fn new(id: SeatId) -> Self {
        Self {
            id,
            is_window: false,
            is_aisle: false,
            is_exit_row: false,
            has_extra_legroom: false,
            is_booked: false,
            is_recommended: false,
            recommendation_score: 0,
        }
    }

    pub fn is_available(&self) -> bool {
        !self.is_booked
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Cabin geometry.
///
/// Constructed through `SeatLayout::new`, which rejects dimensions the
/// window/aisle/adjacency rules can't handle. See `layout.rs` for the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawLayout")]
pub struct SeatLayout {
    pub(crate) rows: RowNumber,
    pub(crate) seats_per_row: u8,
}

/// Wire shape of a layout before its dimensions are checked
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLayout {
    rows: RowNumber,
    seats_per_row: u8,
}

impl TryFrom<RawLayout> for SeatLayout {
    type Error = SeatMapError;

    fn try_from(raw: RawLayout) -> Result<Self> {
        SeatLayout::new(raw.rows, raw.seats_per_row)
    }
}

// =============================================================================
// Preference
// =============================================================================

/// What the passenger asked for.
///
/// Built with the `with_*` methods:
/// ```ignore
/// let pref = Preference::new(2)
///     .with_window(true)
///     .with_seats_together(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preference {
    pub wants_window: bool,
    pub wants_extra_legroom: bool,
    pub wants_exit_row_proximity: bool,
    pub seat_count: u8,
    /// Only meaningful when `seat_count` > 1
    pub seats_together_required: bool,
}

impl Preference {
    pub const MIN_SEAT_COUNT: u8 = 1;
    pub const MAX_SEAT_COUNT: u8 = 2;

    /// Preference for `seat_count` seats with no attribute wishes
    pub fn new(seat_count: u8) -> Self {
        Self {
            wants_window: false,
            wants_extra_legroom: false,
            wants_exit_row_proximity: false,
            seat_count,
            seats_together_required: false,
        }
    }

    pub fn with_window(mut self, wants: bool) -> Self {
        self.wants_window = wants;
        self
    }

    pub fn with_extra_legroom(mut self, wants: bool) -> Self {
        self.wants_extra_legroom = wants;
        self
    }

    pub fn with_exit_row_proximity(mut self, wants: bool) -> Self {
        self.wants_exit_row_proximity = wants;
        self
    }

    pub fn with_seats_together(mut self, required: bool) -> Self {
        self.seats_together_required = required;
        self
    }

    /// Whether this request needs the adjacency search
    pub fn requires_adjacency(&self) -> bool {
        self.seat_count > 1 && self.seats_together_required
    }

    /// Reject seat counts outside `MIN_SEAT_COUNT..=MAX_SEAT_COUNT`
    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_SEAT_COUNT..=Self::MAX_SEAT_COUNT).contains(&self.seat_count) {
            return Err(InvalidInput::SeatCountOutOfRange {
                count: self.seat_count,
                min: Self::MIN_SEAT_COUNT,
                max: Self::MAX_SEAT_COUNT,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for Preference {
    fn default() -> Self {
        Self::new(1)
    }
}

// =============================================================================
// Booked Set
// =============================================================================

/// Seat identifiers already taken on a flight.
///
/// Entries are kept as the raw strings persistence handed us. They are only
/// interpreted by the overlay, which decides what to do with entries that
/// don't match the layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookedSet(BTreeSet<String>);

impl BookedSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn insert(&mut self, seat: impl Into<String>) -> bool {
        self.0.insert(seat.into())
    }

    pub fn contains(&self, seat: &str) -> bool {
        self.0.contains(seat)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for BookedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// Seat Map
// =============================================================================

/// The full cabin as returned to the caller.
///
/// Always contains every seat of the layout, in row-major order, booked or
/// not, so the whole cabin can be rendered with recommendations highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatMap {
    pub rows: RowNumber,
    pub seats_per_row: u8,
    pub seats: Vec<Seat>,
}

impl SeatMap {
    /// Look up a seat by id
    pub fn get(&self, id: &SeatId) -> Option<&Seat> {
        self.seats.iter().find(|seat| seat.id == *id)
    }

    /// Seats flagged as recommended, in row-major order
    pub fn recommended(&self) -> Vec<&Seat> {
        self.seats.iter().filter(|seat| seat.is_recommended).collect()
    }

    /// Number of seats not yet booked
    pub fn available_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.is_available()).count()
    }

    /// All seats of a single row
    ///
    /// Returns an empty slice for rows outside the map.
    pub fn row(&self, row: RowNumber) -> &[Seat] {
        if row == 0 || row > self.rows {
            return &[];
        }
        let width = self.seats_per_row as usize;
        let start = (row as usize - 1) * width;
        self.seats.get(start..start + width).unwrap_or(&[])
    }
}
