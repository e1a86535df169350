//! Candidate solution: tasks per server plus cached loads.

use super::instance::Instance;
use crate::error::{Error, Result};

/// Relocation of one task from one server to another.
///
/// Tabu search uses a move both as the mutation producing a neighbor and as
/// the token stored in its forbidden-move memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Task being relocated.
    pub task: usize,
    /// Server the task currently sits on.
    pub from: usize,
    /// Server the task is moved to.
    pub to: usize,
}

impl Move {
    /// Creates a move.
    pub fn new(task: usize, from: usize, to: usize) -> Self {
        Self { task, from, to }
    }
}

/// An assignment of tasks to servers.
///
/// Each server holds an ordered list of task indices; the order does not
/// affect cost but determines neighborhood enumeration order in tabu search.
/// `server_loads[s]` caches the sum of durations on server `s` and is kept
/// consistent by every mutation.
///
/// Cloning produces a fully independent copy.
///
/// # Examples
///
/// ```
/// use u_loadbal::model::{Assignment, Instance};
///
/// let instance = Instance::new(vec![4, 2, 3], 2).unwrap();
/// let mut sol = Assignment::empty(2);
/// sol.assign(&instance, 0, 0);
/// sol.assign(&instance, 1, 1);
/// sol.assign(&instance, 2, 1);
/// assert_eq!(sol.server_loads(), &[4, 5]);
/// assert_eq!(sol.makespan(), 5);
/// assert!((sol.load_variance() - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    assignment: Vec<Vec<usize>>,
    server_loads: Vec<u64>,
}

impl Assignment {
    /// Creates an assignment with no tasks on any of `server_count` servers.
    pub fn empty(server_count: usize) -> Self {
        Self {
            assignment: vec![Vec::new(); server_count],
            server_loads: vec![0; server_count],
        }
    }

    /// Builds an assignment from a chromosome (gene `i` = server of task `i`).
    ///
    /// Tasks are appended to their servers in ascending task order.
    ///
    /// # Errors
    /// Returns [`Error::ChromosomeLength`] if the chromosome length differs from
    /// the task count, or [`Error::ServerOutOfRange`] for an invalid gene.
    pub fn from_chromosome(instance: &Instance, genes: &[usize]) -> Result<Self> {
        if genes.len() != instance.task_count() {
            return Err(Error::ChromosomeLength {
                expected: instance.task_count(),
                actual: genes.len(),
            });
        }
        let server_count = instance.server_count();
        let mut solution = Self::empty(server_count);
        for (task, &server) in genes.iter().enumerate() {
            if server >= server_count {
                return Err(Error::ServerOutOfRange {
                    server,
                    server_count,
                });
            }
            solution.assign(instance, task, server);
        }
        Ok(solution)
    }

    /// Encodes this assignment as a chromosome.
    ///
    /// Assumes the coverage invariant holds, i.e. the assigned tasks are
    /// exactly `0..task_count()`.
    ///
    /// # Panics
    /// Panics if an assigned task index is `>= task_count()`.
    pub fn to_chromosome(&self) -> Vec<usize> {
        let mut genes = vec![0; self.task_count()];
        for (server, tasks) in self.assignment.iter().enumerate() {
            for &task in tasks {
                genes[task] = server;
            }
        }
        genes
    }

    /// Appends `task` to `server` and adds its duration to the server load.
    ///
    /// The caller is responsible for not assigning a task twice.
    ///
    /// # Panics
    /// Panics if `task` or `server` is out of range.
    pub fn assign(&mut self, instance: &Instance, task: usize, server: usize) {
        let duration = instance.duration(task);
        self.assignment[server].push(task);
        self.server_loads[server] += duration;
    }

    /// Applies a relocation move.
    ///
    /// The task is removed from `mv.from` with the relative order of the
    /// remaining tasks preserved, then appended to `mv.to`.
    ///
    /// # Panics
    /// Panics if the task is not on `mv.from` or `mv.to` is out of range.
    pub fn relocate(&mut self, instance: &Instance, mv: Move) {
        let source = &mut self.assignment[mv.from];
        let pos = source
            .iter()
            .position(|&t| t == mv.task)
            .unwrap_or_else(|| panic!("task {} is not on server {}", mv.task, mv.from));
        source.remove(pos);

        let duration = instance.duration(mv.task);
        self.server_loads[mv.from] -= duration;
        self.assignment[mv.to].push(mv.task);
        self.server_loads[mv.to] += duration;
    }

    /// Makespan this assignment would have after applying `mv`, without
    /// modifying it.
    pub(crate) fn makespan_after(&self, instance: &Instance, mv: Move) -> u64 {
        let mut loads = self.server_loads.clone();
        let duration = instance.duration(mv.task);
        loads[mv.from] -= duration;
        loads[mv.to] += duration;
        loads.into_iter().max().unwrap_or(0)
    }

    /// Maximum server load.
    pub fn makespan(&self) -> u64 {
        self.server_loads.iter().copied().max().unwrap_or(0)
    }

    /// Population variance of the server loads.
    pub fn load_variance(&self) -> f64 {
        let n = self.server_loads.len();
        if n == 0 {
            return 0.0;
        }
        let mean = self.server_loads.iter().sum::<u64>() as f64 / n as f64;
        self.server_loads
            .iter()
            .map(|&load| {
                let d = load as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n as f64
    }

    /// Cached per-server loads.
    pub fn server_loads(&self) -> &[u64] {
        &self.server_loads
    }

    /// Task lists, one per server.
    pub fn assignment(&self) -> &[Vec<usize>] {
        &self.assignment
    }

    /// Tasks currently on `server`, in insertion order.
    ///
    /// # Panics
    /// Panics if `server` is out of range.
    pub fn tasks_on(&self, server: usize) -> &[usize] {
        &self.assignment[server]
    }

    /// Server holding `task`, if any.
    pub fn server_of(&self, task: usize) -> Option<usize> {
        self.assignment
            .iter()
            .position(|tasks| tasks.contains(&task))
    }

    /// Number of servers.
    pub fn server_count(&self) -> usize {
        self.assignment.len()
    }

    /// Number of assigned tasks.
    pub fn task_count(&self) -> usize {
        self.assignment.iter().map(Vec::len).sum()
    }

    /// Verifies the coverage and load invariants against `instance`.
    ///
    /// # Errors
    /// Returns the first violation found: a server-count mismatch, a task
    /// index out of range, a duplicated task, an unassigned task, or a load
    /// cache mismatch.
    pub fn check(&self, instance: &Instance) -> Result<()> {
        if self.server_count() != instance.server_count() {
            return Err(Error::ServerCountMismatch {
                expected: instance.server_count(),
                actual: self.server_count(),
            });
        }

        let task_count = instance.task_count();
        let mut seen = vec![false; task_count];
        for (server, tasks) in self.assignment.iter().enumerate() {
            let mut actual = 0u64;
            for &task in tasks {
                if task >= task_count {
                    return Err(Error::TaskOutOfRange { task, task_count });
                }
                if seen[task] {
                    return Err(Error::DuplicateTask { task });
                }
                seen[task] = true;
                actual += instance.duration(task);
            }
            let cached = self.server_loads[server];
            if cached != actual {
                return Err(Error::LoadMismatch {
                    server,
                    cached,
                    actual,
                });
            }
        }

        match seen.iter().position(|&s| !s) {
            Some(task) => Err(Error::UnassignedTask { task }),
            None => Ok(()),
        }
    }
}
