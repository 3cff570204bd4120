//! The pruned, memoized search must agree with a plain full-width minimax.

use csar_othello::test_utils::play_out;
use csar_othello::{Board, Location};
use csar_search::{Evaluator, SearchConfig, Searcher};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

fn random_game(seed: u64) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    play_out(Board::new(), 64, move |board| {
        board.legal_moves().choose(&mut rng).unwrap()
    })
}

/// Full-width negamax without pruning or memoization.
fn minimax(board: &Board, depth: u8, passed: bool, evaluator: Evaluator) -> i32 {
    if depth == 0 {
        return evaluator.evaluate(board);
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        if passed {
            return evaluator.evaluate(board);
        }
        let mut next = *board;
        next.apply_move(None);
        return -minimax(&next, depth, true, evaluator);
    }

    moves
        .map(|mv| {
            let mut next = *board;
            next.apply_move(Some(mv));
            -minimax(&next, depth - 1, false, evaluator)
        })
        .max()
        .unwrap()
}

fn minimax_root(board: &Board, depth: u8, evaluator: Evaluator) -> (Location, i32) {
    let mut best: Option<(Location, i32)> = None;
    for mv in board.legal_moves() {
        let mut next = *board;
        next.apply_move(Some(mv));
        let score = -minimax(&next, depth - 1, false, evaluator);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }
    best.unwrap()
}

fn check_agreement(board: &Board, depth: u8, evaluator: Evaluator) {
    let config = SearchConfig::default()
        .with_depth(depth)
        .with_evaluator(evaluator);
    let result = Searcher::new(config).unwrap().search(board);
    let (expected_move, expected_score) = minimax_root(board, depth, evaluator);

    assert_eq!(result.score, expected_score, "depth {} {:?}\n{}", depth, evaluator, board);
    assert_eq!(result.best_move, expected_move, "depth {} {:?}\n{}", depth, evaluator, board);
}

#[test]
fn agrees_with_minimax_from_the_opening() {
    for depth in 1..=4 {
        check_agreement(&Board::new(), depth, Evaluator::DiscDifference);
        check_agreement(&Board::new(), depth, Evaluator::Positional);
    }
}

#[test]
fn agrees_with_minimax_in_the_midgame() {
    for seed in 0..8 {
        let game = random_game(seed);
        for board in game.iter().skip(16).step_by(12).filter(|b| !b.legal_moves().is_empty()) {
            check_agreement(board, 3, Evaluator::DiscDifference);
            check_agreement(board, 3, Evaluator::Positional);
        }
    }
}

#[test]
fn agrees_with_minimax_in_low_mobility_endgames() {
    for seed in 100..112 {
        let game = random_game(seed);
        let late = game
            .iter()
            .filter(|b| b.empties().count_occupied() <= 8)
            .find(|b| !b.legal_moves().is_empty());

        if let Some(board) = late {
            // Deep enough to reach the end of the game, passes included.
            check_agreement(board, 10, Evaluator::DiscDifference);
            check_agreement(board, 10, Evaluator::Positional);
        }
    }
}

#[test]
fn chosen_moves_are_always_legal() {
    let mut searcher = Searcher::new(SearchConfig::default().with_depth(3)).unwrap();
    for seed in 200..210 {
        for board in random_game(seed).iter().filter(|b| !b.legal_moves().is_empty()) {
            let mv = searcher.choose_move(board);
            assert!(board.is_legal(mv), "{} is not legal in\n{}", mv, board);
        }
    }
}
