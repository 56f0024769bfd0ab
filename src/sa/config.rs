//! SA configuration.

use crate::error::ConfigError;

/// Configuration for the Simulated Annealing engine.
///
/// Temperature decays geometrically: `T_{k+1} = alpha * T_k`, starting at
/// `initial_temperature` and stopping once it is no longer above
/// `final_temperature`.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_final_temperature(0.1)
///     .with_alpha(0.9)
///     .with_iterations_per_temperature(20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Starting temperature. Higher values accept worsening moves more
    /// freely early on.
    pub initial_temperature: f64,

    /// Stopping threshold. Must be positive: the acceptance probability
    /// divides by the current temperature, so the loop guard keeps the
    /// temperature strictly above zero.
    pub final_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub alpha: f64,

    /// Trial steps at each temperature level.
    pub iterations_per_temperature: usize,

    /// Random seed for reproducible runs. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            final_temperature: 0.1,
            alpha: 0.99,
            iterations_per_temperature: 100,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first constraint violation found. All violations are
    /// fatal: the engine refuses to start a run with an invalid config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_temperature > 0.0) {
            return Err(ConfigError::NonPositiveInitialTemperature(
                self.initial_temperature,
            ));
        }
        if !(self.final_temperature > 0.0) {
            return Err(ConfigError::NonPositiveFinalTemperature(
                self.final_temperature,
            ));
        }
        if self.final_temperature >= self.initial_temperature {
            return Err(ConfigError::FinalNotBelowInitial {
                initial_temperature: self.initial_temperature,
                final_temperature: self.final_temperature,
            });
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(ConfigError::AlphaOutOfRange(self.alpha));
        }
        if self.iterations_per_temperature == 0 {
            return Err(ConfigError::NonPositiveCount {
                name: "iterations_per_temperature",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 1000.0).abs() < 1e-10);
        assert!((config.final_temperature - 0.1).abs() < 1e-10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_final_temperature() {
        let config = SaConfig::default().with_final_temperature(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveFinalTemperature(0.0))
        );
    }

    #[test]
    fn test_validate_rejects_negative_final_temperature() {
        let config = SaConfig::default().with_final_temperature(-0.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_temperature() {
        let config = SaConfig::default().with_initial_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_final_above_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_final_temperature(20.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FinalNotBelowInitial { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_alpha() {
        for alpha in [0.0, 1.0, 1.5, -0.1] {
            let config = SaConfig::default().with_alpha(alpha);
            assert_eq!(config.validate(), Err(ConfigError::AlphaOutOfRange(alpha)));
        }
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let config = SaConfig::default().with_iterations_per_temperature(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveCount {
                name: "iterations_per_temperature"
            })
        );
    }
}
