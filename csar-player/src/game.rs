//! The top-level game loop.

use crate::agents::Agent;
use csar_othello::{Board, Phase, Player};
use std::io::{self, Write};
use tracing::{debug, info, warn};

/// Play `board` to the end, asking `dark` and `light` for their moves and
/// printing the position before every turn. Returns the final position.
pub fn run_game<W: Write>(
    mut board: Board,
    dark: &mut dyn Agent,
    light: &mut dyn Agent,
    out: &mut W,
) -> io::Result<Board> {
    board.compute_status();
    info!(mover = %board.mover(), "game started");

    while board.phase() != Phase::Terminal {
        writeln!(out, "\n{}", board)?;

        let selection = match board.mover() {
            Player::Dark => dark.select_move(&board)?,
            Player::Light => light.select_move(&board)?,
        };

        let mv = match selection {
            Some(mv) if board.is_legal(mv) => mv,
            Some(mv) => {
                warn!(mv = %mv, "agent offered an illegal move");
                continue;
            }
            None => {
                debug!("no move selected, asking again");
                continue;
            }
        };

        board.apply_move(Some(mv));
        board.compute_status();

        if board.phase() == Phase::OneSidePassed {
            writeln!(out, "{} has no legal move and must pass.", !board.mover())?;
        }
    }

    let outcome = board.outcome();
    writeln!(out, "\n{}", board)?;
    writeln!(out, "{}", outcome)?;
    info!(
        dark = board.dark_count(),
        light = board.light_count(),
        "game over: {}",
        outcome
    );

    Ok(board)
}
