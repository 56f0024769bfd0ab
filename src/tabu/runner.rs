//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Generate a random initial tour
//! 2. At each iteration:
//!    a. Enumerate the exhaustive swap neighborhood
//!    b. Drop neighbors present in the tabu list
//!    c. Move to the cheapest admissible neighbor, even if it is worse
//!       than the current tour
//!    d. Record the new tour in the tabu list, update the global best
//! 3. Terminate after `max_iterations`, or early once every neighbor
//!    is tabu
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::collections::HashSet;
use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::TabuConfig;
use crate::error::ConfigError;
use crate::matrix::CostMatrix;
use crate::telemetry::{NullSink, ProgressSink, TabuCheckpoint};
use crate::tour::Tour;

/// Why a Tabu Search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// `max_iterations` was reached.
    IterationLimit,
    /// Every neighbor of the current tour was tabu. A legitimate early
    /// exit, not an error.
    ExhaustedNeighborhood,
}

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best tour found.
    pub best: Tour,
    /// Cost of the best tour.
    pub best_cost: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Iteration at which the best tour was found.
    pub best_iteration: usize,
    /// Why the run stopped.
    pub termination: Termination,
    /// Best cost at each iteration. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Fixed-capacity FIFO memory of recently visited tours.
///
/// A queue preserves insertion order for eviction; a set mirror gives O(1)
/// membership tests. Tours are stored by value, never by reference into
/// the engine's working state.
struct TabuList {
    capacity: usize,
    queue: VecDeque<Tour>,
    set: HashSet<Tour>,
}

impl TabuList {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity),
            set: HashSet::with_capacity(capacity),
        }
    }

    fn contains(&self, tour: &Tour) -> bool {
        self.set.contains(tour)
    }

    /// Inserts a tour, evicting the oldest entry once at capacity.
    fn push(&mut self, tour: Tour) {
        if self.queue.len() >= self.capacity {
            if let Some(oldest) = self.queue.pop_front() {
                self.set.remove(&oldest);
            }
        }
        self.set.insert(tour.clone());
        self.queue.push_back(tour);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Executes the Tabu Search engine.
pub struct TabuRunner;

impl TabuRunner {
    /// Runs Tabu Search on the given cost matrix, discarding progress
    /// records.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid; no search
    /// step runs in that case.
    pub fn run(matrix: &CostMatrix, config: &TabuConfig) -> Result<TabuResult, ConfigError> {
        Self::run_with_sink(matrix, config, &mut NullSink)
    }

    /// Runs Tabu Search, emitting a [`TabuCheckpoint`] every
    /// `log_interval` iterations to the given sink.
    pub fn run_with_sink(
        matrix: &CostMatrix,
        config: &TabuConfig,
        sink: &mut dyn ProgressSink,
    ) -> Result<TabuResult, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current = Tour::random(matrix.len(), &mut rng);
        let mut best = current.clone();
        let mut best_cost = current.cost(matrix);
        let mut best_iteration = 0;

        let mut tabu = TabuList::new(config.tabu_size);
        let mut cost_history = Vec::with_capacity(config.max_iterations);
        let mut iterations = 0;
        let mut termination = Termination::IterationLimit;

        for iteration in 0..config.max_iterations {
            // Cheapest admissible neighbor; strict `<` keeps the
            // first-enumerated tour on ties, so selection is deterministic
            // given the current tour and tabu list.
            let mut selected: Option<(Tour, f64)> = None;
            for neighbor in current.swap_neighbors() {
                if tabu.contains(&neighbor) {
                    continue;
                }
                let cost = neighbor.cost(matrix);
                match selected {
                    Some((_, selected_cost)) if cost >= selected_cost => {}
                    _ => selected = Some((neighbor, cost)),
                }
            }

            let Some((neighbor, neighbor_cost)) = selected else {
                termination = Termination::ExhaustedNeighborhood;
                break;
            };

            // Accept the move unconditionally; only best-so-far is
            // required to improve monotonically.
            current = neighbor;
            tabu.push(current.clone());
            iterations = iteration + 1;

            if neighbor_cost < best_cost {
                best = current.clone();
                best_cost = neighbor_cost;
                best_iteration = iteration;
            }
            cost_history.push(best_cost);

            if iteration % config.log_interval == 0 {
                sink.on_tabu_checkpoint(&TabuCheckpoint {
                    iteration,
                    best_cost,
                });
            }
        }

        Ok(TabuResult {
            best,
            best_cost,
            iterations,
            best_iteration,
            termination,
            cost_history,
        })
    }
}
