//! # Seat Map Crate
//!
//! Domain types and the deterministic front half of seat recommendation:
//! generating a cabin's seats and laying a booked set over them.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (SeatId, Seat, SeatLayout, Preference, BookedSet, SeatMap)
//! - **layout**: Seat layout generator (window/aisle/exit-row/legroom rules)
//! - **overlay**: Marks booked seats, with a policy for ids outside the layout
//! - **parser**: Parse "12C"-style seat identifiers
//! - **catalog**: JSON-backed flight catalog supplying layouts and booked sets
//! - **error**: Error types for the recommendation core and the catalog
//!
//! ## Example Usage
//!
//! ```ignore
//! use seat_map::{BookedSet, BookingOverlay, SeatLayout};
//!
//! let layout = SeatLayout::new(18, 6)?;
//! let booked: BookedSet = ["1C", "1D"].into_iter().collect();
//!
//! let seats = BookingOverlay::default().apply(layout.generate_seats(), &booked)?;
//! assert_eq!(seats.iter().filter(|s| s.is_booked).count(), 2);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod layout;
pub mod overlay;
pub mod parser;
pub mod catalog;

// Re-export commonly used types for convenience
pub use error::{CatalogError, InvalidInput, Result, SeatMapError};
pub use types::{
    // Type aliases
    RowNumber,
    ColumnIndex,
    // Core types
    SeatId,
    Seat,
    SeatLayout,
    Preference,
    BookedSet,
    SeatMap,
};
pub use overlay::{BookingOverlay, UnknownSeatPolicy};
pub use parser::{parse_seat_id, parse_seat_list};
pub use catalog::{Flight, FlightCatalog, FlightId};
