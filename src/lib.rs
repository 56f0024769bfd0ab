//! Metaheuristic solvers for the Traveling Salesman Problem.
//!
//! Given a dense N×N travel cost matrix, this crate searches for a
//! low-cost cyclic tour with two independent engines and compares their
//! outcomes:
//!
//! - **Simulated Annealing (SA)**: stochastic local search over random
//!   pairwise swaps, with a temperature-controlled Metropolis acceptance
//!   rule and geometric cooling.
//! - **Tabu Search (TS)**: deterministic local search over the exhaustive
//!   swap neighborhood, with a fixed-capacity FIFO memory of recently
//!   visited tours that forbids cycling.
//!
//! Both engines share only the read-only [`CostMatrix`] and the [`Tour`]
//! permutation type; each run is single-threaded and keeps its working
//! state private, exposing only the best tour and cost it found.
//!
//! # Examples
//!
//! ```
//! use tsp_metaheur::{compare, CostMatrix, SaConfig, TabuConfig};
//!
//! let matrix = CostMatrix::from_rows(vec![
//!     vec![0.0, 1.0, 9.0, 9.0],
//!     vec![1.0, 0.0, 9.0, 9.0],
//!     vec![9.0, 9.0, 0.0, 1.0],
//!     vec![9.0, 9.0, 1.0, 0.0],
//! ])?;
//!
//! let sa = SaConfig::default()
//!     .with_initial_temperature(100.0)
//!     .with_final_temperature(0.1)
//!     .with_alpha(0.9)
//!     .with_iterations_per_temperature(20)
//!     .with_seed(42);
//! let tabu = TabuConfig::default()
//!     .with_max_iterations(50)
//!     .with_tabu_size(10)
//!     .with_seed(42);
//!
//! let outcome = compare(&matrix, &sa, &tabu)?;
//! assert_eq!(outcome.sa.best_cost, 20.0);
//! assert_eq!(outcome.tabu.best_cost, 20.0);
//! # Ok::<(), tsp_metaheur::ConfigError>(())
//! ```
//!
//! Progress reporting is decoupled from the search: engines write level
//! and checkpoint records to an injected [`ProgressSink`]
//! ([`LogSink`] forwards them to the `log` facade).

pub mod compare;
pub mod error;
pub mod matrix;
pub mod sa;
pub mod tabu;
pub mod telemetry;
pub mod tour;

pub use compare::{compare, compare_with_sink, Comparison, Winner};
pub use error::{ConfigError, TourError};
pub use matrix::CostMatrix;
pub use sa::{SaConfig, SaResult, SaRunner};
pub use tabu::{TabuConfig, TabuResult, TabuRunner, Termination};
pub use telemetry::{LogSink, NullSink, ProgressSink, SaLevelRecord, TabuCheckpoint};
pub use tour::Tour;
