//! [`Agent`] backed by the search engine.

use super::Agent;
use csar_othello::{Board, Location};
use csar_search::Searcher;
use std::io::{self, Write};
use tracing::info;

pub struct EngineAgent<W> {
    searcher: Searcher,
    output: W,
}

impl<W: Write> EngineAgent<W> {
    pub fn new(searcher: Searcher, output: W) -> Self {
        Self { searcher, output }
    }
}

impl<W: Write> Agent for EngineAgent<W> {
    fn select_move(&mut self, board: &Board) -> io::Result<Option<Location>> {
        write!(self.output, "csar is thinking...")?;
        self.output.flush()?;

        let result = self.searcher.search(board);
        info!(
            player = %board.mover(),
            mv = %result.best_move,
            score = result.score,
            nodes = result.stats.nodes,
            table_size = self.searcher.table().len(),
            "engine move"
        );

        writeln!(self.output, " > {}", result.best_move)?;
        Ok(Some(result.best_move))
    }
}
