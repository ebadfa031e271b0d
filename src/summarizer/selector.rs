//! Top-K sentence selection
//!
//! Keeps the K best entries in a min-heap bounded at K, so selecting from S
//! scored sentences costs O(S log K) instead of a full sort.

use crate::types::ScoredSentence;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap entry: ranks by score, then earlier position wins ties
#[derive(Debug, Clone, Copy)]
struct Ranked {
    score: f64,
    index: usize,
    slot: usize,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Selects the K highest scoring sentences
#[derive(Debug, Clone, Copy)]
pub struct TopKSelector {
    k: usize,
}

impl TopKSelector {
    /// Create a selector keeping `k` sentences
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Number of sentences kept
    pub fn k(&self) -> usize {
        self.k
    }

    /// Select the best `k` entries, best first
    ///
    /// Equal scores are ordered by original position, earliest first.
    pub fn select<'a>(&self, scored: &'a [ScoredSentence]) -> Vec<&'a ScoredSentence> {
        if self.k == 0 {
            return Vec::new();
        }

        let mut heap: BinaryHeap<Reverse<Ranked>> = BinaryHeap::with_capacity(self.k + 1);

        for (slot, entry) in scored.iter().enumerate() {
            let candidate = Ranked {
                score: entry.score,
                index: entry.index,
                slot,
            };

            if heap.len() < self.k {
                heap.push(Reverse(candidate));
            } else if let Some(&Reverse(worst)) = heap.peek() {
                if candidate > worst {
                    heap.pop();
                    heap.push(Reverse(candidate));
                }
            }
        }

        heap.into_sorted_vec()
            .into_iter()
            .map(|Reverse(ranked)| &scored[ranked.slot])
            .collect()
    }
}
