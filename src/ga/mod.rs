//! Genetic Algorithm over task → server chromosomes.
//!
//! Each individual is a [`Chromosome`] with one gene per task holding the
//! server it runs on. Fitness is the negated makespan, so maximizing fitness
//! minimizes makespan. The initial population contains the LPT solution and
//! the all-time best is carried into every generation, so the result is
//! never worse than the greedy constructor.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, mutation rate)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with fitness history
//!
//! # Submodules
//!
//! - [`operators`]: Uniform crossover and per-gene reset mutation
//! - [`selection`]: Tournament selection without replacement
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use types::{fitness, makespan, to_fitness, Chromosome, Fitness};
