//! Minimax-optimal move selection.
//!
//! Exhaustively searches the game tree from the current board. Leaf
//! scores bias the search toward faster wins and slower losses, and
//! tic-tac-toe is small enough (at most 9! leaf evaluations from an
//! empty board) that the search always runs to completion.

use super::StrategyError;
use crate::game::{Board, Player, Position, Square, check_winner};
use tracing::{debug, instrument};

/// Returns the minimax-optimal position for `player` on the given board.
///
/// Every open cell is probed in ascending index order: the player's mark
/// is placed, the resulting position is scored by [`minimax`], and the
/// mark is removed again. The strict `>` comparison keeps the first of
/// several equally scored cells, so ties resolve to the lowest index.
///
/// A player always selecting through this function never loses from any
/// reachable position.
#[instrument(skip(board))]
pub fn best_move(board: &Board, player: Player) -> Result<Position, StrategyError> {
    let mut scratch = board.clone();
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }

        scratch.set(pos, Square::Occupied(player));
        let score = minimax(&mut scratch, player, 0, false);
        scratch.set(pos, Square::Empty);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    match best {
        Some((pos, score)) => {
            debug!(position = ?pos, score, "Optimal move selected");
            Ok(pos)
        }
        None => Err(StrategyError::NoMoveAvailable),
    }
}

/// Scores a position for the maximizing `player`.
///
/// `depth` is the number of plies below the probed move; a terminal
/// position reached here scores `10 - depth` for a `player` win,
/// `depth - 10` for an opponent win, and `0` for a draw. Marks placed
/// during the search are always removed before returning.
fn minimax(board: &mut Board, player: Player, depth: i32, maximizing: bool) -> i32 {
    if let Some((winner, _)) = check_winner(board) {
        return if winner == player {
            10 - depth
        } else {
            depth - 10
        };
    }
    if board.is_full() {
        return 0;
    }

    let mover = if maximizing {
        player
    } else {
        player.opponent()
    };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        board.set(pos, Square::Occupied(mover));
        let score = minimax(board, player, depth + 1, !maximizing);
        board.set(pos, Square::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
