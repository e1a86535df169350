//! Makespan-minimizing load balancing on identical parallel servers.
//!
//! Given independent tasks with known integer durations and a fixed number
//! of identical servers, find an assignment minimizing the maximum server
//! load. The problem is NP-hard; this crate provides:
//!
//! - **Greedy (LPT)**: Longest Processing Time first, deterministic,
//!   a `(4/3 - 1/(3m))`-approximation.
//! - **Tabu Search (TS)**: Single-task relocation moves with a short-term
//!   forbidden-move memory and aspiration, seeded with LPT.
//! - **Genetic Algorithm (GA)**: Task → server chromosomes with tournament
//!   selection, uniform crossover and per-gene mutation, seeded with LPT.
//! - **Evaluation**: Uniform harness measuring duration, peak memory, and
//!   the optimality gap against `total_load / server_count`.
//!
//! # Example
//!
//! ```
//! use u_loadbal::eval::{evaluate_all, GeneticSolver, GreedySolver, TabuSolver};
//! use u_loadbal::ga::GaConfig;
//! use u_loadbal::model::Instance;
//! use u_loadbal::tabu::TabuConfig;
//!
//! let instance = Instance::new(vec![10, 15, 20, 25, 30, 35, 40, 45, 50], 3).unwrap();
//! let greedy = GreedySolver::new();
//! let tabu = TabuSolver::new(TabuConfig::default());
//! let ga = GeneticSolver::new(GaConfig::default().with_seed(7));
//!
//! for outcome in evaluate_all(&[&greedy, &tabu, &ga], &instance) {
//!     let eval = outcome.unwrap();
//!     assert!(eval.metrics.makespan >= 90);
//!     println!("{}", eval.metrics);
//! }
//! ```
//!
//! # Architecture
//!
//! Algorithms take the immutable [`model::Instance`] by reference and own
//! all of their search state; randomness is always an explicit generator.
//! Configuration is validated before any search work, and invalid values
//! are rejected with [`Error`], never clamped.

pub mod error;
pub mod eval;
pub mod ga;
pub mod greedy;
pub mod model;
pub mod random;
pub mod tabu;

pub use error::{Error, Result};
