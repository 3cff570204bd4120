//! [`Agent`] reading moves typed as coordinates ("d3").

use super::Agent;
use csar_othello::{Board, Location};
use std::io::{self, BufRead, Write};
use tracing::debug;

pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_move(&mut self, board: &Board) -> io::Result<Option<Location>> {
        write!(self.output, "Legal moves: {} > ", board.legal_moves())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game ended",
            ));
        }

        let loc: Location = match line.parse() {
            Ok(loc) => loc,
            Err(err) => {
                debug!(input = line.trim(), "rejected move: {}", err);
                writeln!(self.output, "Cannot parse move {:?}.", line.trim())?;
                return Ok(None);
            }
        };

        if !board.is_legal(loc) {
            debug!(mv = %loc, "rejected move: not legal");
            writeln!(self.output, "{} is not a legal move.", loc)?;
            return Ok(None);
        }

        Ok(Some(loc))
    }
}
