//! Transposition table: previously searched scores, keyed by position fingerprint.
//!
//! The table is unbounded and never evicts; it lives as long as the
//! [`Searcher`](crate::Searcher) that owns it. Each entry remembers the depth
//! it was searched to and whether its score is exact or only a bound, and is
//! only reused when both make it valid for the query at hand.

use std::collections::hash_map::{Entry as Slot, HashMap};

/// What a stored score says about the true value of its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// The score is the value of the position.
    Exact,
    /// The search failed high: the value is at least the score.
    Lower,
    /// The search failed low: the value is at most the score.
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
}

#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, Entry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a score usable for a search of `depth` plies in the window (`alpha`, `beta`).
    #[inline]
    pub fn probe(&self, key: u64, depth: u8, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries.get(&key)?;
        if entry.depth < depth {
            return None;
        }

        match entry.bound {
            Bound::Exact => Some(entry.score),
            Bound::Lower if entry.score >= beta => Some(entry.score),
            Bound::Upper if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    /// Record a search result. A shallower result never replaces a deeper one.
    #[inline]
    pub fn store(&mut self, key: u64, entry: Entry) {
        match self.entries.entry(key) {
            Slot::Occupied(mut slot) => {
                if slot.get().depth <= entry.depth {
                    slot.insert(entry);
                }
            }
            Slot::Vacant(slot) => {
                slot.insert(entry);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
