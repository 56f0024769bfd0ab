//! SA execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SaConfig;
use crate::error::ConfigError;
use crate::matrix::CostMatrix;
use crate::telemetry::{NullSink, ProgressSink, SaLevelRecord};
use crate::tour::Tour;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best tour found.
    pub best: Tour,

    /// Cost of the best tour.
    pub best_cost: f64,

    /// Total number of trial steps (neighbor evaluations).
    pub iterations: usize,

    /// Number of temperature levels executed.
    pub temperature_levels: usize,

    /// Temperature when the cooling loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best cost sampled once per temperature level. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing engine.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA on the given cost matrix, discarding progress records.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid; no search
    /// step runs in that case.
    pub fn run(matrix: &CostMatrix, config: &SaConfig) -> Result<SaResult, ConfigError> {
        Self::run_with_sink(matrix, config, &mut NullSink)
    }

    /// Runs SA, emitting one [`SaLevelRecord`] per temperature level to the
    /// given sink.
    pub fn run_with_sink(
        matrix: &CostMatrix,
        config: &SaConfig,
        sink: &mut dyn ProgressSink,
    ) -> Result<SaResult, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Initialize with a uniformly random permutation.
        let mut current = Tour::random(matrix.len(), &mut rng);
        let mut current_cost = current.cost(matrix);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut level = 0usize;

        let mut cost_history = Vec::new();
        cost_history.push(best_cost);

        while temperature > config.final_temperature {
            let mut accepted_this_level = 0usize;

            for _ in 0..config.iterations_per_temperature {
                let neighbor = current.random_swap(&mut rng);
                let neighbor_cost = neighbor.cost(matrix);
                let delta = neighbor_cost - current_cost;

                // Metropolis criterion: improvements always accepted,
                // worsening moves with probability exp(-delta / T) at the
                // current temperature.
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    rng.random_range(0.0..1.0) < acceptance_probability(delta, temperature)
                };

                if accept {
                    current = neighbor;
                    current_cost = neighbor_cost;
                    accepted_moves += 1;
                    accepted_this_level += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }
                }

                total_iterations += 1;
            }

            sink.on_sa_level(&SaLevelRecord {
                level,
                temperature,
                best_cost,
                current_cost,
                acceptance_rate: accepted_this_level as f64
                    / config.iterations_per_temperature as f64,
            });
            cost_history.push(best_cost);

            // Cool down.
            temperature *= config.alpha;
            level += 1;
        }

        Ok(SaResult {
            best,
            best_cost,
            iterations: total_iterations,
            temperature_levels: level,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}

/// Metropolis acceptance probability for a non-improving move.
///
/// Improving moves (`delta < 0`) are accepted without consulting
/// randomness; this covers `delta >= 0`, where the probability tends to 0
/// as the temperature cools and to 1 as it grows.
fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta < 0.0 {
        1.0
    } else {
        (-delta / temperature).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::recording::RecordingSink;

    fn clustered_matrix() -> CostMatrix {
        // Two tight clusters {0,1} and {2,3}; optimal cyclic cost is 20.
        CostMatrix::from_rows(vec![
            vec![0.0, 1.0, 9.0, 9.0],
            vec![1.0, 0.0, 9.0, 9.0],
            vec![9.0, 9.0, 0.0, 1.0],
            vec![9.0, 9.0, 1.0, 0.0],
        ])
        .unwrap()
    }

    fn ten_city_matrix() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 2.0, 2.0, 7.0, 15.0, 2.0, 5.0, 7.0, 6.0, 5.0],
            vec![2.0, 0.0, 10.0, 4.0, 7.0, 3.0, 7.0, 15.0, 8.0, 2.0],
            vec![2.0, 10.0, 0.0, 1.0, 4.0, 3.0, 3.0, 4.0, 2.0, 3.0],
            vec![7.0, 4.0, 1.0, 0.0, 2.0, 15.0, 7.0, 7.0, 5.0, 4.0],
            vec![7.0, 10.0, 4.0, 2.0, 0.0, 7.0, 3.0, 2.0, 2.0, 7.0],
            vec![2.0, 3.0, 3.0, 7.0, 7.0, 0.0, 1.0, 7.0, 2.0, 10.0],
            vec![5.0, 7.0, 3.0, 7.0, 3.0, 1.0, 0.0, 2.0, 1.0, 3.0],
            vec![7.0, 7.0, 4.0, 7.0, 2.0, 7.0, 2.0, 0.0, 1.0, 10.0],
            vec![6.0, 8.0, 2.0, 5.0, 2.0, 2.0, 1.0, 1.0, 0.0, 15.0],
            vec![5.0, 2.0, 3.0, 4.0, 7.0, 10.0, 3.0, 10.0, 15.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_sa_finds_optimum_on_clustered_matrix() {
        let matrix = clustered_matrix();
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_final_temperature(0.1)
            .with_alpha(0.9)
            .with_iterations_per_temperature(20)
            .with_seed(42);

        let result = SaRunner::run(&matrix, &config).unwrap();

        assert_eq!(result.best_cost, 20.0);
        assert_eq!(result.best.cost(&matrix), result.best_cost);
    }

    #[test]
    fn test_sa_invalid_config_rejected_before_search() {
        let matrix = clustered_matrix();
        let config = SaConfig::default().with_final_temperature(0.0);
        assert!(SaRunner::run(&matrix, &config).is_err());
    }

    #[test]
    fn test_sa_cost_history_non_increasing() {
        let matrix = ten_city_matrix();
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_final_temperature(0.5)
            .with_alpha(0.95)
            .with_iterations_per_temperature(50)
            .with_seed(7);

        let result = SaRunner::run(&matrix, &config).unwrap();

        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_sa_deterministic_with_seed() {
        let matrix = ten_city_matrix();
        let config = SaConfig::default()
            .with_initial_temperature(50.0)
            .with_final_temperature(0.5)
            .with_alpha(0.9)
            .with_iterations_per_temperature(30)
            .with_seed(123);

        let a = SaRunner::run(&matrix, &config).unwrap();
        let b = SaRunner::run(&matrix, &config).unwrap();

        assert_eq!(a.best, b.best);
        assert_eq!(a.best_cost, b.best_cost);
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[test]
    fn test_sa_high_temperature_accepts_almost_everything() {
        let matrix = ten_city_matrix();
        // exp(-delta / T) ≈ 1 for any realizable delta at T = 1e8.
        let config = SaConfig::default()
            .with_initial_temperature(1e8)
            .with_final_temperature(9e7)
            .with_alpha(0.95)
            .with_iterations_per_temperature(500)
            .with_seed(42);

        let result = SaRunner::run(&matrix, &config).unwrap();

        let acceptance = result.accepted_moves as f64 / result.iterations as f64;
        assert!(
            acceptance > 0.95,
            "expected near-total acceptance at extreme temperature, got {acceptance}"
        );
    }

    #[test]
    fn test_acceptance_probability_limits() {
        // Improvements are certain regardless of temperature.
        assert_eq!(acceptance_probability(-3.0, 100.0), 1.0);
        assert_eq!(acceptance_probability(-0.001, 1e-9), 1.0);

        // Worsening moves: probability tends to 0 as T cools and to 1 as
        // T grows.
        assert_eq!(acceptance_probability(1.0, 1e-9), 0.0);
        assert!(acceptance_probability(1.0, 1e9) > 0.999_999);
        assert!(acceptance_probability(5.0, 1.0) < acceptance_probability(5.0, 10.0));

        // A zero-cost sideways move is always accepted.
        assert_eq!(acceptance_probability(0.0, 0.5), 1.0);
    }

    #[test]
    fn test_sa_level_telemetry() {
        let matrix = clustered_matrix();
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_final_temperature(1.0)
            .with_alpha(0.5)
            .with_iterations_per_temperature(10)
            .with_seed(1);

        let mut sink = RecordingSink::default();
        let result = SaRunner::run_with_sink(&matrix, &config, &mut sink).unwrap();

        // Temperatures 10, 5, 2.5, 1.25 are above the final threshold.
        assert_eq!(result.temperature_levels, 4);
        assert_eq!(sink.sa_levels.len(), 4);
        assert_eq!(sink.sa_levels[0].temperature, 10.0);
        for (index, record) in sink.sa_levels.iter().enumerate() {
            assert_eq!(record.level, index);
            assert!((0.0..=1.0).contains(&record.acceptance_rate));
            assert!(record.best_cost <= record.current_cost);
        }
        // Best cost across level records is non-increasing.
        for window in sink.sa_levels.windows(2) {
            assert!(window[1].best_cost <= window[0].best_cost);
        }
    }

    #[test]
    fn test_sa_result_counters_consistent() {
        let matrix = ten_city_matrix();
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_final_temperature(1.0)
            .with_alpha(0.9)
            .with_iterations_per_temperature(25)
            .with_seed(99);

        let result = SaRunner::run(&matrix, &config).unwrap();

        assert_eq!(
            result.iterations,
            result.temperature_levels * config.iterations_per_temperature
        );
        assert!(result.improving_moves <= result.accepted_moves);
        assert!(result.accepted_moves <= result.iterations);
        assert!(result.final_temperature <= config.final_temperature);
    }
}
