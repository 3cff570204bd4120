//! Search configuration.

use crate::eval::Evaluator;
use crate::hash::DEFAULT_SEED;
use derive_more::{Display, Error};

/// Plies searched below the root when nothing else is configured.
pub const DEFAULT_DEPTH: u8 = 10;

/// Deepest search accepted. No game lasts longer than 60 placements.
pub const MAX_DEPTH: u8 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to search, counting the root move. Passes do not consume depth.
    pub depth: u8,
    pub evaluator: Evaluator,
    /// Seed for the position hasher's masks.
    pub seed: u64,
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum ConfigError {
    #[display(fmt = "search depth must be between 1 and {}, got {}", MAX_DEPTH, _0)]
    DepthOutOfRange(#[error(not(source))] u8),
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            evaluator: Evaluator::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(self, depth: u8) -> Self {
        Self { depth, ..self }
    }

    pub fn with_evaluator(self, evaluator: Evaluator) -> Self {
        Self { evaluator, ..self }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::DepthOutOfRange(self.depth));
        }
        Ok(())
    }
}
