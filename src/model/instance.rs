//! Problem instance: task durations and server count.

use crate::error::{Error, Result};

/// An immutable load-balancing instance.
///
/// Task identity is the index into [`durations`](Instance::durations).
/// Durations are non-negative integers; zero-length tasks are allowed.
/// The total load is at most [`Instance::MAX_TOTAL_LOAD`], so every server
/// load and makespan fits a GA fitness without overflow.
///
/// # Examples
///
/// ```
/// use u_loadbal::model::Instance;
///
/// let instance = Instance::new(vec![10, 15, 20], 2).unwrap();
/// assert_eq!(instance.total_load(), 45);
/// assert!((instance.lower_bound() - 22.5).abs() < 1e-12);
/// assert_eq!(instance.ceil_lower_bound(), 23);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    durations: Vec<u64>,
    server_count: usize,
}

impl Instance {
    /// Largest accepted sum of durations (`i64::MAX`).
    pub const MAX_TOTAL_LOAD: u64 = i64::MAX as u64;

    /// Creates an instance.
    ///
    /// # Errors
    /// Returns [`Error::ZeroServers`] when `server_count` is 0, and
    /// [`Error::LoadOverflow`] when the durations sum past
    /// [`Instance::MAX_TOTAL_LOAD`].
    pub fn new(durations: Vec<u64>, server_count: usize) -> Result<Self> {
        if server_count == 0 {
            return Err(Error::ZeroServers);
        }
        let total = durations
            .iter()
            .try_fold(0u64, |acc, &d| acc.checked_add(d))
            .filter(|&total| total <= Self::MAX_TOTAL_LOAD);
        if total.is_none() {
            return Err(Error::LoadOverflow {
                task_count: durations.len(),
                max: Self::MAX_TOTAL_LOAD,
            });
        }
        Ok(Self {
            durations,
            server_count,
        })
    }

    /// Task durations, indexed by task.
    pub fn durations(&self) -> &[u64] {
        &self.durations
    }

    /// Duration of a single task.
    ///
    /// # Panics
    /// Panics if `task` is out of range.
    pub fn duration(&self, task: usize) -> u64 {
        self.durations[task]
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.durations.len()
    }

    /// Number of servers (always at least 1).
    pub fn server_count(&self) -> usize {
        self.server_count
    }

    /// Sum of all task durations.
    pub fn total_load(&self) -> u64 {
        self.durations.iter().sum()
    }

    /// Fractional lower bound on the makespan: `total_load / server_count`.
    pub fn lower_bound(&self) -> f64 {
        self.total_load() as f64 / self.server_count as f64
    }

    /// Integral lower bound on the makespan: `ceil(total_load / server_count)`.
    pub fn ceil_lower_bound(&self) -> u64 {
        self.total_load().div_ceil(self.server_count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_servers() {
        assert_eq!(Instance::new(vec![1, 2, 3], 0), Err(Error::ZeroServers));
    }

    #[test]
    fn test_rejects_overflowing_total_load() {
        let overflow = Error::LoadOverflow {
            task_count: 2,
            max: Instance::MAX_TOTAL_LOAD,
        };
        assert_eq!(Instance::new(vec![u64::MAX, 1], 2), Err(overflow.clone()));
        assert_eq!(
            Instance::new(vec![Instance::MAX_TOTAL_LOAD, 1], 2),
            Err(overflow)
        );

        let edge = Instance::new(vec![Instance::MAX_TOTAL_LOAD - 1, 1], 2).unwrap();
        assert_eq!(edge.total_load(), Instance::MAX_TOTAL_LOAD);
        assert_eq!(edge.ceil_lower_bound(), Instance::MAX_TOTAL_LOAD / 2 + 1);
    }

    #[test]
    fn test_allows_zero_length_and_empty() {
        let instance = Instance::new(vec![0, 0], 3).unwrap();
        assert_eq!(instance.total_load(), 0);
        assert_eq!(instance.ceil_lower_bound(), 0);

        let empty = Instance::new(Vec::new(), 1).unwrap();
        assert_eq!(empty.task_count(), 0);
        assert!(empty.lower_bound().abs() < 1e-12);
    }

    #[test]
    fn test_lower_bounds() {
        let instance = Instance::new(vec![10, 15, 20, 25, 30, 35, 40, 45, 50], 3).unwrap();
        assert_eq!(instance.total_load(), 270);
        assert!((instance.lower_bound() - 90.0).abs() < 1e-12);
        assert_eq!(instance.ceil_lower_bound(), 90);

        let single = Instance::new(vec![100], 5).unwrap();
        assert!((single.lower_bound() - 20.0).abs() < 1e-12);
    }
}
