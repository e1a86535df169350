//! Forbidden-move memory for Tabu Search.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use crate::model::Move;

/// FIFO memory of the most recently committed moves.
///
/// Holds at most `tenure` entries; pushing beyond that evicts the oldest.
/// The same move may be present more than once (a tabu move can be
/// re-selected through aspiration); it stays forbidden until its last copy
/// is evicted.
#[derive(Debug, Clone)]
pub struct TabuList {
    tenure: usize,
    queue: VecDeque<Move>,
    counts: HashMap<Move, usize>,
}

impl TabuList {
    /// Creates an empty memory holding at most `tenure` moves.
    pub fn new(tenure: usize) -> Self {
        Self {
            tenure,
            queue: VecDeque::with_capacity(tenure + 1),
            counts: HashMap::with_capacity(tenure + 1),
        }
    }

    /// Whether `mv` is currently forbidden.
    pub fn contains(&self, mv: &Move) -> bool {
        self.counts.contains_key(mv)
    }

    /// Records a committed move, evicting the oldest entry when over tenure.
    pub fn push(&mut self, mv: Move) {
        self.queue.push_back(mv);
        *self.counts.entry(mv).or_insert(0) += 1;

        while self.queue.len() > self.tenure {
            let Some(old) = self.queue.pop_front() else {
                break;
            };
            if let Entry::Occupied(mut entry) = self.counts.entry(old) {
                *entry.get_mut() -= 1;
                if *entry.get() == 0 {
                    entry.remove();
                }
            }
        }
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the memory is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Moves in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.queue.iter()
    }
}
