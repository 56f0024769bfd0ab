//! Error taxonomy.
//!
//! Configuration problems are fatal and reported before any search step
//! runs. Tour validity errors guard the permutation invariant and should
//! never surface from the engines' own constructions.

use thiserror::Error;

/// A solver configuration or cost matrix that violates its constraints.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Initial temperature must be strictly positive.
    #[error("initial temperature must be positive, got {0}")]
    NonPositiveInitialTemperature(f64),

    /// Final temperature must be strictly positive (the Metropolis
    /// criterion divides by the current temperature).
    #[error("final temperature must be positive, got {0}")]
    NonPositiveFinalTemperature(f64),

    /// Final temperature must be below the initial temperature or the
    /// cooling loop never runs.
    #[error("final temperature {final_temperature} must be less than initial temperature {initial_temperature}")]
    FinalNotBelowInitial {
        initial_temperature: f64,
        final_temperature: f64,
    },

    /// Geometric cooling factor must lie in the open interval (0, 1).
    #[error("cooling factor alpha must be in (0, 1), got {0}")]
    AlphaOutOfRange(f64),

    /// A count parameter (iterations, tabu capacity, log interval) was zero.
    #[error("{name} must be positive")]
    NonPositiveCount {
        /// Name of the offending parameter.
        name: &'static str,
    },

    /// The cost matrix has fewer than two locations.
    #[error("cost matrix needs at least 2 locations, got {0}")]
    MatrixTooSmall(usize),

    /// A row of the cost matrix does not match the matrix dimension.
    #[error("cost matrix is not square: row {row} has {len} entries, expected {size}")]
    NonSquareMatrix { row: usize, len: usize, size: usize },

    /// A cost entry was negative, NaN, or infinite.
    #[error("cost matrix entry ({row}, {col}) must be non-negative and finite, got {value}")]
    InvalidCost { row: usize, col: usize, value: f64 },
}

/// A tour that is not a permutation of all location indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// The tour visits a different number of locations than the matrix has.
    #[error("tour has {len} positions, expected {expected}")]
    LengthMismatch { len: usize, expected: usize },

    /// A location index is outside `[0, n)`.
    #[error("location index {index} is out of range for {n} locations")]
    IndexOutOfRange { index: usize, n: usize },

    /// A location appears more than once.
    #[error("location {index} appears more than once")]
    DuplicateIndex { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::AlphaOutOfRange(1.5);
        assert_eq!(err.to_string(), "cooling factor alpha must be in (0, 1), got 1.5");

        let err = ConfigError::NonPositiveCount { name: "tabu_size" };
        assert_eq!(err.to_string(), "tabu_size must be positive");
    }

    #[test]
    fn test_tour_error_display() {
        let err = TourError::DuplicateIndex { index: 3 };
        assert_eq!(err.to_string(), "location 3 appears more than once");
    }
}
