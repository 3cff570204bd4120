//! `csar-othello` implements the rules of Othello on packed bitboards.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`bitboard`] contains the raw, unchecked operations for working with Othello boards:
//!    legal move generation and flip computation, both done with whole-board bit operations.
//!  - [`Board`] tracks a full game: both players' discs, the side to move, the phase,
//!    and the derived disc counts and legal moves.
//!
//! Squares are addressed by [`Location`], a one-hot bitboard. The MSB is A1 (upper-left)
//! and squares proceed in row-major order.

pub mod bitboard;
pub mod test_utils;

mod board;
mod game;
mod location;

pub use bitboard::Bitboard;
pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
