//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Error, Result};

/// Configuration for the Genetic Algorithm.
///
/// Builders store values as given; out-of-range values are reported by
/// [`validate`](GaConfig::validate), which the runner calls before any
/// search work.
///
/// # Defaults
///
/// ```
/// use u_loadbal::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_loadbal::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
///
/// let bad = GaConfig::default().with_mutation_rate(1.5);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population (at least 2).
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Per-gene probability of resetting a gene to a random server (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of distinct individuals sampled per tournament.
    ///
    /// When larger than the population, the whole population competes.
    pub tournament_size: usize,

    /// Whether to evaluate individuals in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            mutation_rate: 0.1,
            tournament_size: 3,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::invalid(
                "population_size",
                format!("must be at least 2, got {}", self.population_size),
            ));
        }
        if self.max_generations == 0 {
            return Err(Error::invalid("max_generations", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::invalid(
                "mutation_rate",
                format!("must be within [0, 1], got {}", self.mutation_rate),
            ));
        }
        if self.tournament_size == 0 {
            return Err(Error::invalid("tournament_size", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_field(config: &GaConfig) -> &'static str {
        match config.validate() {
            Err(Error::InvalidParameter { name, .. }) => name,
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 100);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.tournament_size, 3);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_max_generations(1000)
            .with_mutation_rate(0.05)
            .with_tournament_size(5)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 1000);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.tournament_size, 5);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert_eq!(rejected_field(&config), "population_size");
        assert!(GaConfig::default()
            .with_population_size(2)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert_eq!(rejected_field(&config), "max_generations");
    }

    #[test]
    fn test_mutation_rate_is_not_clamped() {
        for rate in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let config = GaConfig::default().with_mutation_rate(rate);
            assert_eq!(rejected_field(&config), "mutation_rate", "rate {rate}");
        }
        for rate in [0.0, 1.0] {
            assert!(GaConfig::default()
                .with_mutation_rate(rate)
                .validate()
                .is_ok());
        }
    }

    #[test]
    fn test_validate_zero_tournament() {
        let config = GaConfig::default().with_tournament_size(0);
        assert_eq!(rejected_field(&config), "tournament_size");
    }
}
