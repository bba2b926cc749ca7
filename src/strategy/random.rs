//! Uniform-random move selection.

use super::StrategyError;
use crate::game::{Board, Position};
use rand::Rng;
use tracing::debug;

/// Chooses uniformly at random among the open positions.
///
/// Each call draws independently; there is no state between calls.
pub(super) fn random_move<R: Rng>(
    board: &Board,
    rng: &mut R,
) -> Result<Position, StrategyError> {
    let open = Position::open_positions(board);
    if open.is_empty() {
        return Err(StrategyError::NoMoveAvailable);
    }

    let choice = open[rng.gen_range(0..open.len())];
    debug!(position = ?choice, open = open.len(), "Random move selected");
    Ok(choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, Square};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_move_is_open() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::TopLeft, Square::Occupied(Player::O));

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let pos = random_move(&board, &mut rng).expect("open squares remain");
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_single_open_square_is_forced() {
        let mut board = Board::new();
        for pos in Position::ALL {
            if pos != Position::BottomCenter {
                board.set(pos, Square::Occupied(Player::X));
            }
        }

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            random_move(&board, &mut rng),
            Ok(Position::BottomCenter)
        );
    }

    #[test]
    fn test_full_board_exhausted() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            random_move(&board, &mut rng),
            Err(StrategyError::NoMoveAvailable)
        );
    }
}
