use csar_othello::{Board, Location};
use std::io;

/// A source of moves for one side: a person at the keyboard, or the engine.
pub trait Agent {
    /// Pick a move for the side to move in `board`, which has at least one legal move.
    ///
    /// `Ok(None)` means no usable move was produced this time (for example,
    /// unreadable input) and the caller should ask again.
    fn select_move(&mut self, board: &Board) -> io::Result<Option<Location>>;
}
