//! Tournament selection.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::seq::index;
use rand::Rng;

use super::types::Fitness;

/// Tournament selection without replacement.
///
/// Samples `min(k, n)` distinct individuals uniformly and returns the index
/// of the one with the highest fitness; among equal fitness the one sampled
/// first wins.
///
/// Higher `k` = stronger selection pressure.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `fitnesses` is empty.
pub fn tournament<R: Rng>(fitnesses: &[Fitness], k: usize, rng: &mut R) -> usize {
    assert!(
        !fitnesses.is_empty(),
        "cannot select from empty population"
    );

    let n = fitnesses.len();
    let amount = k.clamp(1, n);

    let mut winner: Option<usize> = None;
    for idx in index::sample(rng, n, amount).iter() {
        match winner {
            Some(w) if fitnesses[idx] <= fitnesses[w] => {}
            _ => winner = Some(idx),
        }
    }
    winner.unwrap_or(0)
}
