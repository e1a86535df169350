//! Single-run evaluation of an [`Algorithm`].
//!
//! The harness only observes: it runs the algorithm exactly once, with no
//! retries and no time limit, and reports what it measured.

use std::time::Instant;

use tracing::{info, warn};

use super::memory::MemoryWindow;
use super::metrics::Metrics;
use super::solver::Algorithm;
use crate::error::Result;
use crate::model::{Assignment, Instance};

/// Outcome of one evaluated run.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Measured and derived metrics.
    pub metrics: Metrics,
    /// The assignment returned by the algorithm.
    pub solution: Assignment,
}

/// Runs `algorithm` once on `instance` and records its metrics.
///
/// Peak memory is only measured when [`TrackingAllocator`](super::TrackingAllocator)
/// is installed as the global allocator; otherwise it is reported as 0.
/// The heap counters are process-wide, so peak readings assume one
/// evaluation at a time: concurrent runs reset and share the same peak.
///
/// # Errors
/// Propagates the algorithm's error (an invalid configuration).
///
/// # Examples
///
/// ```
/// use u_loadbal::eval::{evaluate, GreedySolver};
/// use u_loadbal::model::Instance;
///
/// let instance = Instance::new(vec![10, 15, 20, 25, 30, 35, 40, 45, 50], 3).unwrap();
/// let eval = evaluate(&GreedySolver::new(), &instance).unwrap();
/// assert_eq!(eval.metrics.makespan, 95);
/// assert!((eval.metrics.lower_bound - 90.0).abs() < 1e-12);
/// ```
pub fn evaluate(algorithm: &dyn Algorithm, instance: &Instance) -> Result<Evaluation> {
    let window = MemoryWindow::open();
    let start = Instant::now();
    let solution = algorithm.solve(instance)?;
    let duration = start.elapsed();
    let peak = window.peak();

    let metrics = Metrics::from_solution(algorithm.name(), instance, &solution, duration, peak);

    info!(
        algorithm = algorithm.name(),
        makespan = metrics.makespan,
        lower_bound = metrics.lower_bound,
        gap_pct = metrics.optimality_gap,
        elapsed_us = duration.as_micros() as u64,
        peak_bytes = peak,
        "algorithm evaluated"
    );

    Ok(Evaluation { metrics, solution })
}

/// Evaluates every algorithm on `instance`, in order.
///
/// A failing run is reported in its slot and does not stop the others.
pub fn evaluate_all(algorithms: &[&dyn Algorithm], instance: &Instance) -> Vec<Result<Evaluation>> {
    algorithms
        .iter()
        .map(|&algorithm| {
            let outcome = evaluate(algorithm, instance);
            if let Err(ref err) = outcome {
                warn!(algorithm = algorithm.name(), error = %err, "algorithm run failed");
            }
            outcome
        })
        .collect()
}
