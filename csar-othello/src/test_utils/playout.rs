use crate::{Board, Location, Phase};

/// Play from `board` for at most `max_plies` moves, asking `choose` for each move.
/// Forced passes are applied through [`Board::compute_status`].
/// Returns every position reached, starting with `board` itself.
pub fn play_out<F>(board: Board, max_plies: usize, mut choose: F) -> Vec<Board>
where
    F: FnMut(&Board) -> Location,
{
    let mut current = board;
    current.compute_status();
    let mut history = vec![current];

    for _ in 0..max_plies {
        if current.phase() == Phase::Terminal {
            break;
        }

        let mv = choose(&current);
        assert!(current.is_legal(mv), "{} is not legal in\n{}", mv, current);
        current.apply_move(Some(mv));
        current.compute_status();
        history.push(current);
    }

    history
}
