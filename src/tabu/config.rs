//! Tabu Search configuration.

use crate::error::{Error, Result};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_loadbal::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_tenure(7)
///     .with_aspiration(true);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_tenure, 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Number of most recent moves kept in the forbidden-move memory.
    pub tabu_tenure: usize,
    /// Whether to use aspiration criterion (override tabu if the move
    /// produces a new global best).
    pub aspiration: bool,
    /// Whether to evaluate the neighborhood in parallel using rayon.
    ///
    /// Selection is always made over results in enumeration order, so the
    /// outcome does not depend on this flag.
    pub parallel: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tabu_tenure: 10,
            aspiration: true,
            parallel: false,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure (size of the forbidden-move memory).
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Enables or disables aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Enables or disables parallel neighborhood evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if the iteration budget or the
    /// tenure is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(Error::invalid("max_iterations", "must be at least 1"));
        }
        if self.tabu_tenure == 0 {
            return Err(Error::invalid("tabu_tenure", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.tabu_tenure, 10);
        assert!(config.aspiration);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_max_iterations(1000)
            .with_tabu_tenure(3)
            .with_aspiration(false)
            .with_parallel(true);

        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tabu_tenure, 3);
        assert!(!config.aspiration);
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_zero_iterations() {
        let err = TabuConfig::default()
            .with_max_iterations(0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                name: "max_iterations",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_zero_tenure() {
        let err = TabuConfig::default()
            .with_tabu_tenure(0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                name: "tabu_tenure",
                ..
            }
        ));
    }
}
