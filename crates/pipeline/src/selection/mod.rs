//! Selection strategy implementations.
//!
//! This module contains the concrete strategies a SeatSelector dispatches to.

pub mod adjacent;
pub mod highest_score;

// Re-export for convenience
pub use adjacent::AdjacentSeatsStrategy;
pub use highest_score::HighestScoreStrategy;
