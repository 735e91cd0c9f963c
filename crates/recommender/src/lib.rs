//! Recommender crate for the seat recommendation engine.
//!
//! This crate ties the pipeline together: the pure `recommend` operation,
//! the seat map assembler, and the orchestrator that feeds the core from a
//! flight catalog.

pub mod assembler;
pub mod engine;
pub mod orchestrator;

pub use assembler::assemble;
pub use engine::{recommend, RecommenderConfig, SeatRecommender};
pub use orchestrator::{ErrorStatus, FlightNotFound, RecommendationOrchestrator};
