//! `csar-search` picks moves for the computer player.
//!
//! The search is a depth-limited negamax with alpha-beta pruning, scored by a
//! pluggable [`Evaluator`] and memoized in a [`TranspositionTable`] keyed by
//! [`PositionHasher`] fingerprints. Everything is single-threaded and
//! deterministic for a given [`SearchConfig`].

pub mod config;
pub mod eval;
pub mod hash;
pub mod search;
pub mod table;

pub use config::{ConfigError, SearchConfig};
pub use eval::Evaluator;
pub use hash::PositionHasher;
pub use search::{SearchResult, SearchStats, Searcher};
pub use table::TranspositionTable;
