//! Static evaluation of positions for the side to move.

use csar_othello::{bitboard, Bitboard, Board, LocationList};
use derive_more::{Display, Error};
use std::fmt;

/// Square weights in row-major order from A1.
/// Corners are prized; the squares next to them give corners away.
#[rustfmt::skip]
pub const WEIGHTS: [i32; 64] = [
     30, -12,  0, -1, -1,  0, -12,  30,
    -12, -15, -3, -3, -3, -3, -15, -12,
      0,  -3,  0, -1, -1,  0,  -3,   0,
     -1,  -3, -1, -1, -1, -1,  -3,  -1,
     -1,  -3, -1, -1, -1, -1,  -3,  -1,
      0,  -3,  0, -1, -1,  0,  -3,   0,
    -12, -15, -3, -3, -3, -3, -15, -12,
     30, -12,  0, -1, -1,  0, -12,  30,
];

/// How leaf positions are scored. Positive scores favor the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluator {
    /// My discs minus the opponent's discs.
    DiscDifference,
    /// Sum of [`WEIGHTS`] over my discs minus the sum over the opponent's.
    Positional,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::DiscDifference
    }
}

impl Evaluator {
    #[inline]
    pub fn evaluate(self, board: &Board) -> i32 {
        match self {
            Evaluator::DiscDifference => {
                bitboard::score_absolute_difference(board.own(), board.opponent())
            }
            Evaluator::Positional => weight_of(board.own()) - weight_of(board.opponent()),
        }
    }
}

#[inline]
fn weight_of(discs: Bitboard) -> i32 {
    LocationList::from(discs)
        .map(|loc| WEIGHTS[loc.to_index() as usize])
        .sum()
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "unknown evaluator (expected \"disc\" or \"positional\")")]
pub struct ParseEvaluatorError;

impl std::str::FromStr for Evaluator {
    type Err = ParseEvaluatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disc" | "discs" => Ok(Evaluator::DiscDifference),
            "positional" | "weight" | "weights" => Ok(Evaluator::Positional),
            _ => Err(ParseEvaluatorError),
        }
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluator::DiscDifference => f.write_str("disc"),
            Evaluator::Positional => f.write_str("positional"),
        }
    }
}
