//! Command-line options for the `csar` binary.

use clap::Parser;
use csar_othello::{ParsePlayerError, Player};
use csar_search::config::DEFAULT_DEPTH;
use csar_search::hash::DEFAULT_SEED;
use csar_search::{ConfigError, Evaluator, SearchConfig};
use std::str::FromStr;

/// Play Othello against the csar engine. Moves are typed as coordinates, e.g. d3.
#[derive(Clone, Debug, Parser, PartialEq, Eq)]
#[command(name = "csar", version)]
pub struct Options {
    /// Plies searched by the engine (1 to 60)
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u8,

    /// Leaf evaluation: disc or positional
    #[arg(long = "eval", value_name = "EVAL", default_value_t = Evaluator::default())]
    pub evaluator: Evaluator,

    /// Seed for the position hash masks
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Side played at the keyboard: dark, light or none
    #[arg(long, value_name = "SIDE", default_value = "dark")]
    pub human: Seat,
}

/// Who sits at the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seat {
    Player(Player),
    /// The engine plays both sides.
    Nobody,
}

impl FromStr for Seat {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("none") {
            return Ok(Seat::Nobody);
        }
        s.parse().map(Seat::Player)
    }
}

impl Options {
    /// The engine settings chosen on the command line, checked for range.
    pub fn search_config(&self) -> Result<SearchConfig, ConfigError> {
        let config = SearchConfig::default()
            .with_depth(self.depth)
            .with_evaluator(self.evaluator)
            .with_seed(self.seed);
        config.validate()?;
        Ok(config)
    }

    /// The side played at the keyboard, if any.
    pub fn human(&self) -> Option<Player> {
        match self.human {
            Seat::Player(player) => Some(player),
            Seat::Nobody => None,
        }
    }
}
