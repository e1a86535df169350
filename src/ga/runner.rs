//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.
//!
//! # Algorithm
//!
//! 1. Random population; slot 0 replaced by the LPT chromosome
//! 2. Each generation:
//!    a. Evaluate every chromosome
//!    b. Update the all-time best (strict improvement only)
//!    c. Next population = all-time best + offspring pairs from two
//!       tournaments, uniform crossover and per-gene mutation,
//!       truncated to `population_size`
//! 3. After `max_generations`, decode the all-time best

use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, trace};

use super::config::GaConfig;
use super::operators::{random_chromosome, reset_mutation, uniform_crossover};
use super::selection::tournament;
use super::types::{fitness, Chromosome, Fitness};
use crate::error::Result;
use crate::greedy;
use crate::model::{Assignment, Instance};
use crate::random::rng_from_option;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Decoded best assignment found during the entire run.
    pub best: Assignment,

    /// Chromosome of the best assignment.
    pub best_chromosome: Chromosome,

    /// Fitness of the best chromosome (`-best_makespan`).
    pub best_fitness: Fitness,

    /// Makespan of the best assignment.
    pub best_makespan: u64,

    /// Total number of generations executed.
    pub generations: usize,

    /// All-time best fitness after evaluating each generation.
    pub fitness_history: Vec<Fitness>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_loadbal::ga::{GaConfig, GaRunner};
/// use u_loadbal::model::Instance;
///
/// let instance = Instance::new(vec![5, 3, 3, 2, 2, 1], 2).unwrap();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&instance, &config).unwrap();
/// assert_eq!(result.best_makespan, 8);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator built from `config.seed`.
    ///
    /// # Errors
    /// Returns a configuration error if `config` is invalid.
    pub fn run(instance: &Instance, config: &GaConfig) -> Result<GaResult> {
        config.validate()?;
        let mut rng = rng_from_option(config.seed);
        evolve(instance, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`; `config.seed` is ignored.
    ///
    /// # Errors
    /// Returns a configuration error if `config` is invalid.
    pub fn run_with_rng<R: Rng>(
        instance: &Instance,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate()?;
        evolve(instance, config, rng)
    }
}

fn evolve<R: Rng>(instance: &Instance, config: &GaConfig, rng: &mut R) -> Result<GaResult> {
    let task_count = instance.task_count();
    let server_count = instance.server_count();

    // 1. Initialize population, seeded with the LPT solution
    let mut population: Vec<Chromosome> = (0..config.population_size)
        .map(|_| random_chromosome(task_count, server_count, rng))
        .collect();
    population[0] = greedy::lpt(instance).to_chromosome();

    let mut best_chromosome = population[0].clone();
    let mut best_fitness = i64::MIN;
    let mut fitness_history = Vec::with_capacity(config.max_generations);

    debug!(
        tasks = task_count,
        servers = server_count,
        population = config.population_size,
        max_generations = config.max_generations,
        "genetic algorithm started"
    );

    // 2. Evolutionary loop
    for generation in 1..=config.max_generations {
        let fitnesses = evaluate_population(instance, &population, config.parallel);

        let (gen_best_idx, gen_best) = find_best(&fitnesses);
        if gen_best > best_fitness {
            best_fitness = gen_best;
            best_chromosome = population[gen_best_idx].clone();
        }
        fitness_history.push(best_fitness);

        trace!(generation, gen_best, best_fitness, "generation evaluated");

        let mut next_gen: Vec<Chromosome> = Vec::with_capacity(config.population_size + 1);
        next_gen.push(best_chromosome.clone());

        while next_gen.len() < config.population_size {
            let p1 = tournament(&fitnesses, config.tournament_size, rng);
            let p2 = tournament(&fitnesses, config.tournament_size, rng);

            let (mut child1, mut child2) =
                uniform_crossover(&population[p1], &population[p2], rng);
            reset_mutation(&mut child1, server_count, config.mutation_rate, rng);
            reset_mutation(&mut child2, server_count, config.mutation_rate, rng);

            next_gen.push(child1);
            next_gen.push(child2);
        }
        next_gen.truncate(config.population_size);

        population = next_gen;
    }

    let best = Assignment::from_chromosome(instance, &best_chromosome)?;
    let best_makespan = best.makespan();

    debug!(
        generations = config.max_generations,
        best_makespan, "genetic algorithm finished"
    );

    Ok(GaResult {
        best,
        best_chromosome,
        best_fitness,
        best_makespan,
        generations: config.max_generations,
        fitness_history,
    })
}

/// Fitness of every chromosome, in population order.
fn evaluate_population(
    instance: &Instance,
    population: &[Chromosome],
    parallel: bool,
) -> Vec<Fitness> {
    if parallel {
        population
            .par_iter()
            .map(|genes| fitness(instance, genes))
            .collect()
    } else {
        population
            .iter()
            .map(|genes| fitness(instance, genes))
            .collect()
    }
}

/// Index and value of the highest fitness; the first one wins ties.
fn find_best(fitnesses: &[Fitness]) -> (usize, Fitness) {
    let mut best = (0, i64::MIN);
    for (idx, &f) in fitnesses.iter().enumerate() {
        if idx == 0 || f > best.1 {
            best = (idx, f);
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
