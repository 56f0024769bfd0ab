//! Progress reporting.
//!
//! Engines write progress records to an injected [`ProgressSink`] at fixed
//! checkpoints. The sink is append-only working memory for the caller; the
//! engines never read it back and its contents never influence the search.

/// One Simulated Annealing temperature level.
#[derive(Debug, Clone, PartialEq)]
pub struct SaLevelRecord {
    /// Zero-based temperature level index.
    pub level: usize,
    /// Temperature the level ran at.
    pub temperature: f64,
    /// Best cost found so far across the whole run.
    pub best_cost: f64,
    /// Cost of the current working tour at the end of the level.
    pub current_cost: f64,
    /// Fraction of trial steps accepted during this level, in [0, 1].
    pub acceptance_rate: f64,
}

/// One Tabu Search reporting checkpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct TabuCheckpoint {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Best cost found so far.
    pub best_cost: f64,
}

/// Receives progress records from the engines.
///
/// Both hooks default to no-ops, so a sink only implements the side it
/// cares about.
pub trait ProgressSink {
    /// Called once per SA temperature level.
    fn on_sa_level(&mut self, record: &SaLevelRecord) {
        let _ = record;
    }

    /// Called every `log_interval` TS iterations.
    fn on_tabu_checkpoint(&mut self, record: &TabuCheckpoint) {
        let _ = record;
    }
}

/// Discards everything. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {}

/// Forwards progress records to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn on_sa_level(&mut self, record: &SaLevelRecord) {
        log::info!(
            "sa level {}: temp={:.2} best={:.2} current={:.2} accept_rate={:.2}",
            record.level,
            record.temperature,
            record.best_cost,
            record.current_cost,
            record.acceptance_rate
        );
    }

    fn on_tabu_checkpoint(&mut self, record: &TabuCheckpoint) {
        log::info!(
            "tabu iteration {}: best={:.2}",
            record.iteration,
            record.best_cost
        );
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// Test sink that keeps every record it sees.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub sa_levels: Vec<SaLevelRecord>,
        pub tabu_checkpoints: Vec<TabuCheckpoint>,
    }

    impl ProgressSink for RecordingSink {
        fn on_sa_level(&mut self, record: &SaLevelRecord) {
            self.sa_levels.push(record.clone());
        }

        fn on_tabu_checkpoint(&mut self, record: &TabuCheckpoint) {
            self.tabu_checkpoints.push(record.clone());
        }
    }
}
