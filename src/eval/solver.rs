//! Common interface over the three assignment algorithms.

use crate::error::Result;
use crate::ga::{GaConfig, GaRunner};
use crate::greedy;
use crate::model::{Assignment, Instance};
use crate::tabu::{TabuConfig, TabuRunner};

/// An algorithm producing an [`Assignment`] for an [`Instance`].
///
/// Implementations carry their own configuration so the harness can drive
/// them uniformly.
pub trait Algorithm: Send + Sync {
    /// Display name used in metrics records.
    fn name(&self) -> &str;

    /// Solves `instance`.
    ///
    /// # Errors
    /// Returns a configuration error if the algorithm's parameters are invalid.
    fn solve(&self, instance: &Instance) -> Result<Assignment>;
}

/// Longest Processing Time greedy constructor.
#[derive(Debug, Clone)]
pub struct GreedySolver {
    name: String,
}

impl GreedySolver {
    /// Creates the solver with the default name `"Greedy (LPT)"`.
    pub fn new() -> Self {
        Self {
            name: "Greedy (LPT)".into(),
        }
    }

    /// Overrides the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for GreedySolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for GreedySolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn solve(&self, instance: &Instance) -> Result<Assignment> {
        Ok(greedy::lpt(instance))
    }
}

/// Tabu Search seeded with the LPT solution.
#[derive(Debug, Clone)]
pub struct TabuSolver {
    name: String,
    config: TabuConfig,
}

impl TabuSolver {
    /// Creates the solver with the default name `"Tabu Search"`.
    pub fn new(config: TabuConfig) -> Self {
        Self {
            name: "Tabu Search".into(),
            config,
        }
    }

    /// Overrides the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The search configuration.
    pub fn config(&self) -> &TabuConfig {
        &self.config
    }
}

impl Algorithm for TabuSolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn solve(&self, instance: &Instance) -> Result<Assignment> {
        TabuRunner::run(instance, &self.config).map(|result| result.best)
    }
}

/// Genetic Algorithm seeded with the LPT solution.
#[derive(Debug, Clone)]
pub struct GeneticSolver {
    name: String,
    config: GaConfig,
}

impl GeneticSolver {
    /// Creates the solver with the default name `"Genetic Algorithm"`.
    pub fn new(config: GaConfig) -> Self {
        Self {
            name: "Genetic Algorithm".into(),
            config,
        }
    }

    /// Overrides the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The evolution configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}

impl Algorithm for GeneticSolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn solve(&self, instance: &Instance) -> Result<Assignment> {
        GaRunner::run(instance, &self.config).map(|result| result.best)
    }
}
