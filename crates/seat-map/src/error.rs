//! Error types for the seat-map crate.
//!
//! Every failure the recommendation core can produce is one of three kinds:
//! - `InvalidInput` - malformed layout, seat count out of range, or booked
//!   seats that don't fit the layout
//! - `InsufficientSeats` - fewer unbooked seats than requested
//! - `NoAdjacentSeatsAvailable` - togetherness required but no row has a
//!   free block of adjacent seats
//!
//! Catalog loading has its own error type since it deals with files and JSON,
//! not with the recommendation itself.

use thiserror::Error;

/// Errors returned by the recommendation core.
///
/// All variants are recoverable at the caller boundary. None of them is ever
/// retried or papered over with a degraded answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeatMapError {
    /// The request or its inputs were malformed
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// Fewer unbooked seats exist than were requested
    #[error("Not enough available seats: requested {requested}, available {available}")]
    InsufficientSeats { requested: usize, available: usize },

    /// Enough seats are free, just not next to each other in any row
    #[error("Could not find {requested} adjacent seats in any row")]
    NoAdjacentSeatsAvailable { requested: usize },
}

impl SeatMapError {
    /// Whether the error should be reported as a bad request.
    ///
    /// Every variant is classified here explicitly.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::InvalidInput(_) => true,
            Self::InsufficientSeats { .. } => true,
            Self::NoAdjacentSeatsAvailable { .. } => true,
        }
    }
}

/// The specific ways an input can be invalid
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// Layout dimensions outside the supported range
    #[error("layout {rows}x{seats_per_row} is not valid: {reason}")]
    InvalidLayout {
        rows: u16,
        seats_per_row: u8,
        reason: String,
    },

    /// Requested seat count is outside 1..=2
    #[error("number of seats must be between {min} and {max}, got {count}")]
    SeatCountOutOfRange { count: u8, min: u8, max: u8 },

    /// A seat identifier couldn't be parsed
    #[error("malformed seat id '{value}': {reason}")]
    MalformedSeatId { value: String, reason: String },

    /// Booked set references seats that aren't part of the layout
    #[error("booked seats not present in layout: {}", seats.join(", "))]
    UnknownBookedSeats { seats: Vec<String> },
}

/// Errors that can occur while loading or saving a flight catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error while reading or writing the catalog
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catalog content is not valid JSON for the expected shape
    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Two flights share the same id
    #[error("Duplicate flight id {id}")]
    DuplicateFlight { id: u64 },

    /// A flight carries a layout the generator can't build
    #[error("Flight {id} is invalid: {source}")]
    InvalidFlight {
        id: u64,
        #[source]
        source: SeatMapError,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SeatMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_converts_into_seat_map_error() {
        let err: SeatMapError = InvalidInput::SeatCountOutOfRange {
            count: 3,
            min: 1,
            max: 2,
        }
        .into();

        assert!(matches!(err, SeatMapError::InvalidInput(_)));
        assert_eq!(
            err.to_string(),
            "Invalid input: number of seats must be between 1 and 2, got 3"
        );
    }

    #[test]
    fn test_unknown_seats_message_lists_ids() {
        let err = InvalidInput::UnknownBookedSeats {
            seats: vec!["9Z".to_string(), "99A".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "booked seats not present in layout: 9Z, 99A"
        );
    }

    #[test]
    fn test_all_core_errors_are_client_errors() {
        let invalid: SeatMapError = InvalidInput::MalformedSeatId {
            value: "01A".to_string(),
            reason: "row number has a leading zero".to_string(),
        }
        .into();
        assert!(invalid.is_client_error());
        assert!(SeatMapError::InsufficientSeats { requested: 2, available: 1 }.is_client_error());
        assert!(SeatMapError::NoAdjacentSeatsAvailable { requested: 2 }.is_client_error());
    }
}
