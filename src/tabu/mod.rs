//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that uses short-term memory
//! (the tabu list) to forbid recently visited tours, preventing cycling
//! and encouraging exploration of new regions of the search space.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;

pub use config::TabuConfig;
pub use runner::{TabuResult, TabuRunner, Termination};
