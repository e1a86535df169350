//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the LPT solution (or a caller-supplied one)
//! 2. At each iteration:
//!    a. Enumerate every single-task relocation of the current solution
//!    b. Evaluate the makespan each move would produce
//!    c. Select the lowest-makespan move that is not tabu, or that is tabu
//!       but beats the global best (aspiration)
//!    d. Apply the move, add it to the tabu list
//!    e. Update global best if improved
//! 3. Terminate after max iterations or when no move is admissible
//!
//! Ties between candidates go to the first in enumeration order: source
//! server ascending, then task order on that server, then destination
//! server ascending. Given the same starting solution the search is fully
//! deterministic, whether or not the neighborhood is scanned in parallel.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use rayon::prelude::*;
use tracing::{debug, trace};

use super::config::TabuConfig;
use super::types::TabuList;
use crate::error::Result;
use crate::greedy;
use crate::model::{Assignment, Instance, Move};

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best solution found.
    pub best: Assignment,
    /// Makespan of the best solution.
    pub best_makespan: u64,
    /// Number of iterations that committed a move.
    pub iterations: usize,
    /// Iteration (1-based) at which the best solution was found; 0 if the
    /// starting solution was never improved.
    pub best_iteration: usize,
    /// Whether the search stopped because no admissible move remained.
    pub converged: bool,
    /// Best makespan after each committed iteration.
    pub makespan_history: Vec<u64>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search starting from the LPT solution.
    ///
    /// # Errors
    /// Returns a configuration error if `config` is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_loadbal::model::Instance;
    /// use u_loadbal::tabu::{TabuConfig, TabuRunner};
    ///
    /// let instance = Instance::new(vec![10, 7, 8, 12, 3], 2).unwrap();
    /// let result = TabuRunner::run(&instance, &TabuConfig::default()).unwrap();
    /// assert_eq!(result.best_makespan, 20);
    /// ```
    pub fn run(instance: &Instance, config: &TabuConfig) -> Result<TabuResult> {
        config.validate()?;
        let initial = greedy::lpt(instance);
        Ok(search(instance, config, initial))
    }

    /// Executes Tabu Search starting from `initial`.
    ///
    /// # Errors
    /// Returns a configuration error if `config` is invalid, or the invariant
    /// violation if `initial` is not a complete, consistent assignment for
    /// `instance`.
    pub fn run_from(
        instance: &Instance,
        config: &TabuConfig,
        initial: Assignment,
    ) -> Result<TabuResult> {
        config.validate()?;
        initial.check(instance)?;
        Ok(search(instance, config, initial))
    }
}

fn search(instance: &Instance, config: &TabuConfig, initial: Assignment) -> TabuResult {
    let mut current = initial;
    let mut best = current.clone();
    let mut best_makespan = best.makespan();
    let mut best_iteration = 0;

    let mut tabu = TabuList::new(config.tabu_tenure);
    let mut makespan_history = Vec::with_capacity(config.max_iterations);
    let mut converged = false;

    debug!(
        tasks = instance.task_count(),
        servers = instance.server_count(),
        initial_makespan = best_makespan,
        max_iterations = config.max_iterations,
        tenure = config.tabu_tenure,
        "tabu search started"
    );

    for iteration in 1..=config.max_iterations {
        let moves = neighborhood(&current);
        let makespans = evaluate_moves(instance, &current, &moves, config.parallel);

        let Some((mv, makespan)) = select_move(&moves, &makespans, &tabu, best_makespan, config)
        else {
            converged = true;
            break;
        };

        current.relocate(instance, mv);
        debug_assert_eq!(current.makespan(), makespan);
        debug_assert!(current.check(instance).is_ok());

        if makespan < best_makespan {
            best = current.clone();
            best_makespan = makespan;
            best_iteration = iteration;
        }

        tabu.push(mv);
        makespan_history.push(best_makespan);

        trace!(
            iteration,
            task = mv.task,
            from = mv.from,
            to = mv.to,
            makespan,
            best_makespan,
            "tabu move committed"
        );
    }

    debug!(
        iterations = makespan_history.len(),
        best_makespan,
        best_iteration,
        converged,
        "tabu search finished"
    );

    TabuResult {
        best,
        best_makespan,
        iterations: makespan_history.len(),
        best_iteration,
        converged,
        makespan_history,
    }
}

/// All single-task relocations of `solution`, in canonical order.
fn neighborhood(solution: &Assignment) -> Vec<Move> {
    let servers = solution.server_count();
    let mut moves = Vec::with_capacity(solution.task_count() * servers.saturating_sub(1));
    for from in 0..servers {
        for &task in solution.tasks_on(from) {
            for to in (0..servers).filter(|&to| to != from) {
                moves.push(Move::new(task, from, to));
            }
        }
    }
    moves
}

/// Resulting makespan for each move, in the same order as `moves`.
fn evaluate_moves(
    instance: &Instance,
    current: &Assignment,
    moves: &[Move],
    parallel: bool,
) -> Vec<u64> {
    if parallel {
        moves
            .par_iter()
            .map(|&mv| current.makespan_after(instance, mv))
            .collect()
    } else {
        moves
            .iter()
            .map(|&mv| current.makespan_after(instance, mv))
            .collect()
    }
}

/// Lowest-makespan admissible move; the first one wins ties.
fn select_move(
    moves: &[Move],
    makespans: &[u64],
    tabu: &TabuList,
    best_makespan: u64,
    config: &TabuConfig,
) -> Option<(Move, u64)> {
    let mut chosen: Option<(Move, u64)> = None;
    for (&mv, &makespan) in moves.iter().zip(makespans) {
        let aspirated = config.aspiration && makespan < best_makespan;
        if tabu.contains(&mv) && !aspirated {
            continue;
        }
        match chosen {
            Some((_, c)) if makespan >= c => {}
            _ => chosen = Some((mv, makespan)),
        }
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn five_tasks() -> Instance {
        Instance::new(vec![10, 7, 8, 12, 3], 2).unwrap()
    }

    #[test]
    fn test_tabu_improves_on_greedy() {
        let instance = five_tasks();
        assert_eq!(greedy::lpt(&instance).makespan(), 21);

        let result = TabuRunner::run(&instance, &TabuConfig::default()).unwrap();

        assert_eq!(result.best_makespan, 20, "lower bound is 20");
        assert_eq!(result.best.makespan(), 20);
        assert_eq!(result.best.tasks_on(0), &[3, 2]);
        assert_eq!(result.best.tasks_on(1), &[0, 4, 1]);
        assert_eq!(result.best_iteration, 4);
        assert!(result.best.check(&instance).is_ok());
    }

    #[test]
    fn test_tabu_converges_when_every_move_is_tabu() {
        let instance = five_tasks();
        let result = TabuRunner::run(&instance, &TabuConfig::default()).unwrap();

        assert!(result.converged, "expected early termination");
        assert_eq!(result.iterations, 10);
        assert_eq!(result.makespan_history.len(), result.iterations);
    }

    #[test]
    fn test_every_committed_move_keeps_assignment_consistent() {
        let instance = Instance::new(vec![9, 4, 6, 2, 8, 3, 5, 7, 1], 3).unwrap();
        let config = TabuConfig::default().with_max_iterations(25).with_tabu_tenure(4);

        let mut current = greedy::lpt(&instance);
        let mut best_makespan = current.makespan();
        let mut tabu = TabuList::new(config.tabu_tenure);
        let mut history = Vec::new();

        for _ in 0..config.max_iterations {
            let moves = neighborhood(&current);
            let makespans = evaluate_moves(&instance, &current, &moves, false);
            let Some((mv, makespan)) =
                select_move(&moves, &makespans, &tabu, best_makespan, &config)
            else {
                break;
            };

            current.relocate(&instance, mv);
            assert_eq!(current.check(&instance), Ok(()), "after {mv:?}");
            assert_eq!(current.makespan(), makespan);
            assert_eq!(current.server_of(mv.task), Some(mv.to));

            best_makespan = best_makespan.min(makespan);
            tabu.push(mv);
            history.push(best_makespan);
        }

        let result = TabuRunner::run(&instance, &config).unwrap();
        assert_eq!(result.makespan_history, history);
        assert_eq!(result.best_makespan, best_makespan);
    }

    #[test]
    fn test_tabu_iteration_budget() {
        let instance = five_tasks();
        let config = TabuConfig::default().with_max_iterations(3);
        let result = TabuRunner::run(&instance, &config).unwrap();

        assert_eq!(result.iterations, 3);
        assert!(!result.converged);
        assert_eq!(result.best_makespan, 21, "improvement only comes at iteration 4");
        assert_eq!(result.best_iteration, 0);
    }

    #[test]
    fn test_tabu_nine_tasks_stays_at_greedy() {
        // No single relocation lowers the 95 peak of the LPT solution, and
        // the tabu walk does not find the 90 optimum with relocations alone.
        let instance = Instance::new(vec![10, 15, 20, 25, 30, 35, 40, 45, 50], 3).unwrap();
        let result = TabuRunner::run(&instance, &TabuConfig::default()).unwrap();

        assert_eq!(result.best_makespan, 95);
        assert_eq!(result.best, greedy::lpt(&instance));
        assert_eq!(result.iterations, 100);
        assert!(!result.converged);
    }

    #[test]
    fn test_tabu_single_task() {
        let instance = Instance::new(vec![100], 5).unwrap();
        let result = TabuRunner::run(&instance, &TabuConfig::default()).unwrap();

        assert_eq!(result.best_makespan, 100);
        assert!(result.converged);
        assert_eq!(result.iterations, 8);
    }

    #[test]
    fn test_tabu_single_server_has_no_neighbors() {
        let instance = Instance::new(vec![7, 7, 7], 1).unwrap();
        let result = TabuRunner::run(&instance, &TabuConfig::default()).unwrap();

        assert_eq!(result.best_makespan, 21);
        assert!(result.converged);
        assert_eq!(result.iterations, 0);
        assert!(result.makespan_history.is_empty());
    }

    #[test]
    fn test_tabu_unit_tasks() {
        let instance = Instance::new(vec![1, 1, 1, 1], 4).unwrap();
        let result = TabuRunner::run(&instance, &TabuConfig::default()).unwrap();
        assert_eq!(result.best_makespan, 1);
        assert!(result.best.load_variance().abs() < 1e-12);
    }

    #[test]
    fn test_tabu_history_non_increasing() {
        let instance = Instance::new(vec![9, 4, 6, 2, 8, 3, 5, 7, 1, 6], 3).unwrap();
        let result = TabuRunner::run(&instance, &TabuConfig::default()).unwrap();

        for window in result.makespan_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best makespan history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        assert!(result.best_makespan <= greedy::lpt(&instance).makespan());
    }

    #[test]
    fn test_tabu_parallel_matches_sequential() {
        let instance = Instance::new(vec![9, 4, 6, 2, 8, 3, 5, 7, 1, 6, 11, 2], 4).unwrap();
        let sequential = TabuRunner::run(&instance, &TabuConfig::default()).unwrap();
        let parallel =
            TabuRunner::run(&instance, &TabuConfig::default().with_parallel(true)).unwrap();

        assert_eq!(sequential.best, parallel.best);
        assert_eq!(sequential.makespan_history, parallel.makespan_history);
        assert_eq!(sequential.iterations, parallel.iterations);
    }

    #[test]
    fn test_tabu_run_from_custom_seed() {
        let instance = five_tasks();
        let initial = Assignment::from_chromosome(&instance, &[0, 0, 0, 0, 0]).unwrap();
        let result = TabuRunner::run_from(&instance, &TabuConfig::default(), initial).unwrap();

        assert!(result.best_makespan < 40);
        assert!(result.best_iteration >= 1);
        assert!(result.best.check(&instance).is_ok());
    }

    #[test]
    fn test_tabu_run_from_rejects_incomplete_seed() {
        let instance = five_tasks();
        let mut initial = Assignment::empty(2);
        initial.assign(&instance, 0, 0);
        let err = TabuRunner::run_from(&instance, &TabuConfig::default(), initial).unwrap_err();
        assert_eq!(err, Error::UnassignedTask { task: 1 });
    }

    #[test]
    fn test_tabu_rejects_invalid_config() {
        let instance = five_tasks();
        let config = TabuConfig::default().with_tabu_tenure(0);
        assert!(TabuRunner::run(&instance, &config).is_err());
    }

    #[test]
    fn test_neighborhood_order() {
        let instance = Instance::new(vec![1, 2, 3], 3).unwrap();
        let sol = Assignment::from_chromosome(&instance, &[1, 1, 0]).unwrap();
        let moves = neighborhood(&sol);
        assert_eq!(
            moves,
            vec![
                Move::new(2, 0, 1),
                Move::new(2, 0, 2),
                Move::new(0, 1, 0),
                Move::new(0, 1, 2),
                Move::new(1, 1, 0),
                Move::new(1, 1, 2),
            ]
        );
    }

    #[test]
    fn test_select_move_respects_tabu_and_aspiration() {
        let moves = [Move::new(0, 0, 1), Move::new(1, 0, 1), Move::new(2, 1, 0)];
        let makespans = [5, 5, 7];
        let mut tabu = TabuList::new(4);
        tabu.push(moves[0]);

        let config = TabuConfig::default();
        // Tabu move 0 does not beat best (5), so the tie goes to move 1.
        assert_eq!(
            select_move(&moves, &makespans, &tabu, 5, &config),
            Some((moves[1], 5))
        );
        // Tabu move 0 beats best (6) and is first in order.
        assert_eq!(
            select_move(&moves, &makespans, &tabu, 6, &config),
            Some((moves[0], 5))
        );

        tabu.push(moves[1]);
        tabu.push(moves[2]);
        assert_eq!(select_move(&moves, &makespans, &tabu, 5, &config), None);

        let no_aspiration = TabuConfig::default().with_aspiration(false);
        assert_eq!(
            select_move(&moves, &makespans, &tabu, 100, &no_aspiration),
            None
        );
    }
}
