//! Tabu Search configuration.

use crate::error::ConfigError;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(50)
///     .with_tabu_size(10);
/// assert_eq!(config.max_iterations, 50);
/// assert_eq!(config.tabu_size, 10);
/// ```
#[derive(Debug, Clone)]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,

    /// Capacity of the tabu list. Larger values forbid cycling over a
    /// longer window but restrict admissible moves more aggressively.
    pub tabu_size: usize,

    /// A progress checkpoint is emitted every this many iterations.
    pub log_interval: usize,

    /// Random seed for the initial tour. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tabu_size: 50,
            log_interval: 200,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_tabu_size(mut self, size: usize) -> Self {
        self.tabu_size = size;
        self
    }

    /// Sets the progress reporting interval.
    pub fn with_log_interval(mut self, n: usize) -> Self {
        self.log_interval = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first constraint violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::NonPositiveCount {
                name: "max_iterations",
            });
        }
        if self.tabu_size == 0 {
            return Err(ConfigError::NonPositiveCount { name: "tabu_size" });
        }
        if self.log_interval == 0 {
            return Err(ConfigError::NonPositiveCount {
                name: "log_interval",
            });
        }
        Ok(())
    }
}
