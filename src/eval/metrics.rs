//! Solution quality and cost metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Maximum server load |
//! | Load variance | Population variance of server loads |
//! | Lower bound | `total_load / server_count` |
//! | Optimality gap | `(makespan - lower_bound) / lower_bound × 100` |
//! | Duration | Wall-clock time of the run |
//! | Peak memory | Peak heap growth during the run |

use std::fmt;
use std::time::Duration;

use crate::model::{Assignment, Instance};

/// Metrics record of one algorithm run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Display name of the algorithm.
    pub algorithm: String,
    /// Maximum server load.
    pub makespan: u64,
    /// Population variance of the server loads.
    pub load_variance: f64,
    /// Wall-clock duration of the run.
    pub duration: Duration,
    /// Peak heap bytes allocated during the run (0 when not tracked).
    pub peak_memory_bytes: usize,
    /// `total_load / server_count`.
    pub lower_bound: f64,
    /// Percentage excess of the makespan over the lower bound.
    pub optimality_gap: f64,
    /// Per-server loads.
    pub server_loads: Vec<u64>,
}

impl Metrics {
    /// Derives the metrics record from a finished run.
    pub fn from_solution(
        algorithm: impl Into<String>,
        instance: &Instance,
        solution: &Assignment,
        duration: Duration,
        peak_memory_bytes: usize,
    ) -> Self {
        let makespan = solution.makespan();
        let lower_bound = instance.lower_bound();
        Self {
            algorithm: algorithm.into(),
            makespan,
            load_variance: solution.load_variance(),
            duration,
            peak_memory_bytes,
            lower_bound,
            optimality_gap: optimality_gap(makespan, lower_bound),
            server_loads: solution.server_loads().to_vec(),
        }
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    /// Peak memory in MiB.
    pub fn peak_memory_mb(&self) -> f64 {
        self.peak_memory_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Percentage excess of `makespan` over `lower_bound`.
///
/// Returns 0 when the lower bound is 0 (no work to distribute).
pub fn optimality_gap(makespan: u64, lower_bound: f64) -> f64 {
    if lower_bound <= 0.0 {
        return 0.0;
    }
    (makespan as f64 - lower_bound) / lower_bound * 100.0
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.algorithm)?;
        writeln!(f, "  Makespan (max load) : {}", self.makespan)?;
        writeln!(f, "  Load variance       : {:.2}", self.load_variance)?;
        writeln!(f, "  Execution time      : {:.4} s", self.duration_secs())?;
        writeln!(f, "  Peak memory         : {:.4} MB", self.peak_memory_mb())?;
        writeln!(f, "  Lower bound         : {:.2}", self.lower_bound)?;
        writeln!(f, "  Optimality gap      : {:.2}%", self.optimality_gap)?;
        write!(f, "  Server loads        : {:?}", self.server_loads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greedy;

    #[test]
    fn test_metrics_nine_tasks() {
        let instance = Instance::new(vec![10, 15, 20, 25, 30, 35, 40, 45, 50], 3).unwrap();
        let solution = greedy::lpt(&instance);
        let metrics = Metrics::from_solution(
            "Greedy (LPT)",
            &instance,
            &solution,
            Duration::from_millis(3),
            2 * 1024 * 1024,
        );

        assert_eq!(metrics.makespan, 95);
        assert!((metrics.lower_bound - 90.0).abs() < 1e-12);
        assert!((metrics.optimality_gap - 50.0 / 9.0).abs() < 1e-9);
        assert!((metrics.load_variance - 50.0 / 3.0).abs() < 1e-9);
        assert_eq!(metrics.server_loads, vec![95, 90, 85]);
        assert!((metrics.peak_memory_mb() - 2.0).abs() < 1e-12);
        assert!((metrics.duration_secs() - 0.003).abs() < 1e-12);
    }

    #[test]
    fn test_gap_with_zero_lower_bound() {
        assert_eq!(optimality_gap(0, 0.0), 0.0);
        assert!((optimality_gap(100, 20.0) - 400.0).abs() < 1e-12);
    }

    #[test]
    fn test_display_rounds_like_report() {
        let instance = Instance::new(vec![10, 15, 20, 25, 30, 35, 40, 45, 50], 3).unwrap();
        let solution = greedy::lpt(&instance);
        let metrics =
            Metrics::from_solution("Greedy (LPT)", &instance, &solution, Duration::ZERO, 0);
        let text = metrics.to_string();

        assert!(text.starts_with("Greedy (LPT)\n"));
        assert!(text.contains("Load variance       : 16.67"));
        assert!(text.contains("Optimality gap      : 5.56%"));
        assert!(text.contains("Lower bound         : 90.00"));
        assert!(text.contains("Server loads        : [95, 90, 85]"));
    }
}
