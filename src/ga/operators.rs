//! Genetic operators for task → server chromosomes.
//!
//! Every gene is an independent server choice, so any combination of genes
//! is a valid chromosome; no repair step is needed after crossover or
//! mutation.
//!
//! - [`random_chromosome`]: each gene uniform in `0..server_count`
//! - [`uniform_crossover`]: per-gene coin flip between parents — O(n)
//! - [`reset_mutation`]: per-gene random reset with a fixed rate — O(n)
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

use rand::Rng;

use super::types::Chromosome;

/// Creates a chromosome assigning every task to a uniformly random server.
///
/// # Panics
/// Panics if `server_count` is 0 and `task_count` is not.
pub fn random_chromosome<R: Rng>(task_count: usize, server_count: usize, rng: &mut R) -> Chromosome {
    (0..task_count)
        .map(|_| rng.random_range(0..server_count))
        .collect()
}

/// Uniform crossover producing two complementary children.
///
/// For each position, with probability 1/2 child 1 takes the gene of
/// parent 1 and child 2 that of parent 2; otherwise the contributions swap.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    let mut child1 = Vec::with_capacity(parent1.len());
    let mut child2 = Vec::with_capacity(parent2.len());
    for (&a, &b) in parent1.iter().zip(parent2) {
        if rng.random_bool(0.5) {
            child1.push(a);
            child2.push(b);
        } else {
            child1.push(b);
            child2.push(a);
        }
    }
    (child1, child2)
}

/// Resets each gene, independently with probability `rate`, to a uniformly
/// random server.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]` or `server_count` is 0 while genes
/// are present.
pub fn reset_mutation<R: Rng>(genes: &mut [usize], server_count: usize, rate: f64, rng: &mut R) {
    for gene in genes.iter_mut() {
        if rng.random_bool(rate) {
            *gene = rng.random_range(0..server_count);
        }
    }
}
