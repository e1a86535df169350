//! Evaluation harness.
//!
//! Wraps any [`Algorithm`] to measure wall-clock duration and peak heap
//! memory of one run, and derives its [`Metrics`] against the lower bound
//! `total_load / server_count`.
//!
//! # Key Types
//!
//! - [`Algorithm`]: capability shared by [`GreedySolver`], [`TabuSolver`], [`GeneticSolver`]
//! - [`Metrics`]: immutable per-run record
//! - [`TrackingAllocator`]: opt-in global allocator for peak-memory readings

mod harness;
mod memory;
mod metrics;
mod solver;

pub use harness::{evaluate, evaluate_all, Evaluation};
pub use memory::{current_bytes, peak_bytes, MemoryWindow, TrackingAllocator};
pub use metrics::{optimality_gap, Metrics};
pub use solver::{Algorithm, GeneticSolver, GreedySolver, TabuSolver};
