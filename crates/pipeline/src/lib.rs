//! Scoring and selection of seat candidates.
//!
//! This crate provides:
//! - PreferenceScorer for turning preferences into per-seat scores
//! - SelectionStrategy trait and implementations (best score, adjacent block)
//! - SeatSelector for routing a request to the right strategy
//!
//! ## Architecture
//! The pipeline processes a request's seats in stages:
//! 1. PreferenceScorer scores every available seat
//! 2. Available seats become Candidates
//! 3. SeatSelector validates the request and picks the seats
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{PreferenceScorer, SeatSelector};
//!
//! let scorer = PreferenceScorer::new();
//! let scored = scorer.score_seats(seats, &preference);
//! let candidates = scorer.candidates(&scored);
//!
//! let chosen = SeatSelector::new().select(&candidates, &layout, &preference)?;
//! ```

pub mod traits;
pub mod scoring;
pub mod selection;
pub mod selector;

// Re-export main types
pub use traits::SelectionStrategy;
pub use scoring::{Candidate, PreferenceScorer, score_seat};
pub use selector::{SeatSelector, SelectionMode};
