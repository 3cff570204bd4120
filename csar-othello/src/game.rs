//! Players, game phases and results.

use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Player {
    Dark,
    Light,
}

impl Default for Player {
    /// Gets the starting player (dark).
    fn default() -> Self {
        Self::Dark
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Dark => f.write_str("Dark"),
            Player::Light => f.write_str("Light"),
        }
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" | "black" | "x" => Ok(Player::Dark),
            "light" | "white" | "o" => Ok(Player::Light),
            _ => Err(ParsePlayerError),
        }
    }
}

/// Where a game stands after the last status check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The side to move has at least one legal move.
    InProgress,
    /// The previous mover had no legal move, so the turn passed back.
    OneSidePassed,
    /// Neither side can move.
    Terminal,
}

impl Default for Phase {
    fn default() -> Self {
        Self::InProgress
    }
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins!", player),
            Outcome::Draw => f.write_str("Draw."),
        }
    }
}
