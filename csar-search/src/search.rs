//! Depth-limited negamax search with alpha-beta pruning.
//!
//! The search mutates a private working copy of the board in place: every
//! trial move is applied to the working board, searched, and undone by
//! restoring a snapshot taken just before it.

use crate::config::{ConfigError, SearchConfig};
use crate::hash::PositionHasher;
use crate::table::{Bound, Entry, TranspositionTable};
use csar_othello::{Board, Location};
use tracing::{debug, trace};

/// Larger than any evaluation. Kept at `i32::MAX` so it can be negated safely.
pub const INFINITY: i32 = i32::MAX;

/// Counters collected during one root search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls into the recursive search, including leaves.
    pub nodes: u64,
    /// Nodes answered from the transposition table.
    pub table_hits: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Location,
    /// Value of `best_move` for the side to move at the root.
    pub score: i32,
    pub depth: u8,
    pub stats: SearchStats,
}

/// Chooses moves for one side. Owns its hasher and transposition table,
/// which persist across calls so later moves can reuse earlier work.
pub struct Searcher {
    config: SearchConfig,
    hasher: PositionHasher,
    table: TranspositionTable,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            hasher: PositionHasher::new(config.seed),
            table: TranspositionTable::new(),
            stats: SearchStats::default(),
        })
    }

    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    /// Pick the best move for the side to move.
    ///
    /// Panics if the side to move has no legal move; the caller must settle
    /// passes with [`Board::compute_status`] before asking.
    pub fn choose_move(&mut self, board: &Board) -> Location {
        self.search(board).best_move
    }

    /// Search every root move to the configured depth.
    /// Ties go to the earliest move in row-major order.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        let mut moves = board.legal_moves();
        let first = match moves.next() {
            Some(mv) => mv,
            None => panic!("no legal moves to search in\n{}", board),
        };

        self.stats = SearchStats::default();
        let mut working = *board;

        let mut best_move = first;
        let mut best_score = self.score_root_move(&mut working, first, -INFINITY);
        for mv in moves {
            let score = self.score_root_move(&mut working, mv, best_score);
            if score > best_score {
                best_move = mv;
                best_score = score;
            }
        }

        assert!(
            board.is_legal(best_move),
            "search chose illegal move {} in\n{}",
            best_move,
            board
        );
        debug_assert_eq!(working, *board);

        debug!(
            best_move = %best_move,
            score = best_score,
            depth = self.config.depth,
            nodes = self.stats.nodes,
            table_hits = self.stats.table_hits,
            table_size = self.table.len(),
            "root search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
            depth: self.config.depth,
            stats: self.stats,
        }
    }

    /// Score one root move, exactly if it beats `alpha`.
    fn score_root_move(&mut self, working: &mut Board, mv: Location, alpha: i32) -> i32 {
        let snapshot = *working;
        working.apply_move(Some(mv));
        let score = -self.negamax(working, self.config.depth - 1, -INFINITY, -alpha, false);
        *working = snapshot;

        trace!(mv = %mv, score, "root move");
        score
    }

    fn negamax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        passed: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            return self.config.evaluator.evaluate(board);
        }

        let key = self.hasher.hash(board);
        if let Some(score) = self.table.probe(key, depth, alpha, beta) {
            self.stats.table_hits += 1;
            return score;
        }

        let moves = board.legal_moves();
        if moves.is_empty() {
            // Both players passed: game is over
            if passed {
                return self.config.evaluator.evaluate(board);
            }

            // I pass, but my opponent may have moves
            let snapshot = *board;
            board.apply_move(None);
            let score = -self.negamax(board, depth, -beta, -alpha, true);
            *board = snapshot;
            return score;
        }

        let original_alpha = alpha;
        let snapshot = *board;

        for mv in moves {
            board.apply_move(Some(mv));
            let score = -self.negamax(board, depth - 1, -beta, -alpha, false);
            *board = snapshot;

            alpha = alpha.max(score);

            // Fail high: this line is so good for me my opponent won't allow it
            if alpha >= beta {
                self.table.store(
                    key,
                    Entry {
                        depth,
                        score: alpha,
                        bound: Bound::Lower,
                    },
                );
                return alpha;
            }
        }

        let bound = if alpha > original_alpha {
            Bound::Exact
        } else {
            Bound::Upper
        };
        self.table.store(
            key,
            Entry {
                depth,
                score: alpha,
                bound,
            },
        );

        alpha
    }
}
