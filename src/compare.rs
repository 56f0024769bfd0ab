//! Head-to-head comparison of the two engines.
//!
//! Runs Simulated Annealing and Tabu Search once each, strictly in
//! sequence, on the same read-only cost matrix, and reports whichever
//! found the cheaper tour. The comparator only consumes engine outputs;
//! it never reaches into engine internals.

use crate::error::ConfigError;
use crate::matrix::CostMatrix;
use crate::sa::{SaConfig, SaResult, SaRunner};
use crate::tabu::{TabuConfig, TabuResult, TabuRunner};
use crate::telemetry::{NullSink, ProgressSink};

/// Which engine found the cheaper tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    SimulatedAnnealing,
    TabuSearch,
    Tie,
}

/// The outcome of one comparison run.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// The Simulated Annealing result.
    pub sa: SaResult,
    /// The Tabu Search result.
    pub tabu: TabuResult,
}

impl Comparison {
    /// Compares the two best costs.
    pub fn winner(&self) -> Winner {
        if self.sa.best_cost < self.tabu.best_cost {
            Winner::SimulatedAnnealing
        } else if self.tabu.best_cost < self.sa.best_cost {
            Winner::TabuSearch
        } else {
            Winner::Tie
        }
    }
}

/// Runs both engines on `matrix` and returns their paired results.
///
/// Both configurations are validated before either engine starts, so an
/// invalid Tabu Search configuration aborts the whole comparison rather
/// than wasting an SA run.
///
/// # Errors
///
/// Returns the first [`ConfigError`] found in either configuration.
pub fn compare(
    matrix: &CostMatrix,
    sa_config: &SaConfig,
    tabu_config: &TabuConfig,
) -> Result<Comparison, ConfigError> {
    compare_with_sink(matrix, sa_config, tabu_config, &mut NullSink)
}

/// Like [`compare`], forwarding progress records from both runs to `sink`.
pub fn compare_with_sink(
    matrix: &CostMatrix,
    sa_config: &SaConfig,
    tabu_config: &TabuConfig,
    sink: &mut dyn ProgressSink,
) -> Result<Comparison, ConfigError> {
    sa_config.validate()?;
    tabu_config.validate()?;

    let sa = SaRunner::run_with_sink(matrix, sa_config, sink)?;
    let tabu = TabuRunner::run_with_sink(matrix, tabu_config, sink)?;

    Ok(Comparison { sa, tabu })
}
