//! Win detection logic for tic-tac-toe.

use super::{Board, Player, Position, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals, in canonical order.
///
/// [`check_winner`] scans lines in this order, so when a board contains
/// more than one completed line the earliest one here is the one reported.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the winning player together with the completed line,
/// or `None` if no line is complete.
#[instrument]
pub(crate) fn check_winner(board: &Board) -> Option<(Player, [Position; 3])> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some((player, line)),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(line: [Position; 3], player: Player) -> Board {
        let mut board = Board::new();
        for pos in line {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            let board = board_with(line, Player::X);
            assert_eq!(check_winner(&board), Some((Player::X, line)));
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(
            [Position::TopLeft, Position::Center, Position::BottomRight],
            Player::O,
        );
        assert_eq!(
            check_winner(&board),
            Some((
                Player::O,
                [Position::TopLeft, Position::Center, Position::BottomRight]
            ))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_canonical_order_reported() {
        // Top row and left column complete at the same time; the row
        // comes first in WIN_LINES.
        let mut board = board_with(
            [Position::TopLeft, Position::TopCenter, Position::TopRight],
            Player::X,
        );
        board.set(Position::MiddleLeft, Square::Occupied(Player::X));
        board.set(Position::BottomLeft, Square::Occupied(Player::X));

        let (winner, line) = check_winner(&board).expect("winner");
        assert_eq!(winner, Player::X);
        assert_eq!(
            line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }
}
