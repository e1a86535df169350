//! Longest Processing Time (LPT) greedy constructor.
//!
//! # Algorithm
//!
//! 1. Sort tasks by duration descending, ties by task index ascending
//! 2. Assign each task, in that order, to the least-loaded server
//!    (lowest server index among equally loaded servers)
//!
//! LPT is a `(4/3 - 1/(3m))`-approximation for makespan on `m` identical
//! machines and seeds both metaheuristics in this crate.
//!
//! # Complexity
//! O(T log T + T·S) for T tasks and S servers.
//!
//! # Reference
//! Graham, R. L. (1969). "Bounds on Multiprocessing Timing Anomalies",
//! *SIAM Journal on Applied Mathematics* 17(2), 416-429.

use std::cmp::Reverse;

use crate::model::{Assignment, Instance};

/// Builds the deterministic LPT assignment for `instance`.
///
/// # Examples
///
/// ```
/// use u_loadbal::greedy;
/// use u_loadbal::model::Instance;
///
/// let instance = Instance::new(vec![3, 3, 2, 2, 2], 2).unwrap();
/// let sol = greedy::lpt(&instance);
/// assert_eq!(sol.makespan(), 7);
/// ```
pub fn lpt(instance: &Instance) -> Assignment {
    let mut order: Vec<usize> = (0..instance.task_count()).collect();
    // Stable sort keeps ascending task index among equal durations.
    order.sort_by_key(|&task| Reverse(instance.duration(task)));

    let mut solution = Assignment::empty(instance.server_count());
    for task in order {
        let server = least_loaded(solution.server_loads());
        solution.assign(instance, task, server);
    }
    solution
}

/// Index of the first server with minimal load.
fn least_loaded(loads: &[u64]) -> usize {
    let mut best = 0;
    for (server, &load) in loads.iter().enumerate().skip(1) {
        if load < loads[best] {
            best = server;
        }
    }
    best
}
