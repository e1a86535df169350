//! Chromosome encoding and fitness.
//!
//! A chromosome has one gene per task; gene `i` is the server task `i` runs
//! on. Fitness is the negated makespan, so higher fitness is better.

use crate::model::Instance;

/// Direct task → server encoding.
pub type Chromosome = Vec<usize>;

/// Fitness value: `-makespan`. Higher is better.
pub type Fitness = i64;

/// Makespan of the assignment encoded by `genes`.
///
/// Equivalent to decoding through
/// [`Assignment::from_chromosome`](crate::model::Assignment::from_chromosome)
/// and taking its makespan, without building the task lists.
///
/// # Panics
/// Panics if a gene is not a valid server index.
pub fn makespan(instance: &Instance, genes: &[usize]) -> u64 {
    let mut loads = vec![0u64; instance.server_count()];
    for (&server, &duration) in genes.iter().zip(instance.durations()) {
        loads[server] += duration;
    }
    loads.into_iter().max().unwrap_or(0)
}

/// Fitness of `genes`.
pub fn fitness(instance: &Instance, genes: &[usize]) -> Fitness {
    to_fitness(makespan(instance, genes))
}

/// Converts a makespan to a fitness value.
///
/// Exact for every makespan of a valid [`Instance`], whose total load is
/// capped at [`Instance::MAX_TOTAL_LOAD`].
pub fn to_fitness(makespan: u64) -> Fitness {
    -i64::try_from(makespan).unwrap_or(i64::MAX)
}
