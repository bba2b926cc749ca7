//! The tic-tac-toe game state machine.
//!
//! [`GameState`] owns the board, the player to move, and the game status.
//! It transitions only through [`GameState::make_move`]; the `Won` and
//! `Draw` states are terminal and absorb every further move attempt.

use super::action::{Move, MoveError};
use super::position::Position;
use super::types::{Board, Player, Square};
use super::{check_winner, invariants};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Result of evaluating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game continues; the named player moves next.
    Continue(Player),
    /// Game ended with a winner.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line, for caller-side highlighting.
        line: [Position; 3],
    },
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns true if the game is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue(_))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Continue(player) => write!(f, "{player} to move"),
            Outcome::Won { winner, .. } => write!(f, "Player {winner} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state.
///
/// Created at game start with an empty board, X to move, and status
/// `InProgress`; mutated by alternating move application; terminal the
/// instant a win or full-board draw is detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true until a terminal condition is reached.
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies a move, returning the resulting [`Outcome`].
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended
    /// - [`MoveError::SquareOccupied`] if the square is taken
    /// - [`MoveError::WrongPlayer`] if it is not the mover's turn
    ///
    /// On any error the board is left unchanged.
    #[instrument(skip(self), fields(position = ?mov.position, player = ?mov.player))]
    pub fn make_move(&mut self, mov: Move) -> Result<Outcome, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(mov.position) {
            return Err(MoveError::SquareOccupied(mov.position));
        }
        if mov.player != self.to_move {
            return Err(MoveError::WrongPlayer(mov.player));
        }

        self.board.set(mov.position, Square::Occupied(mov.player));
        self.history.push(mov);

        let outcome = match check_winner(&self.board) {
            Some((winner, line)) => {
                self.status = GameStatus::Won(winner);
                Outcome::Won { winner, line }
            }
            None if self.board.is_full() => {
                self.status = GameStatus::Draw;
                Outcome::Draw
            }
            None => {
                self.to_move = self.to_move.opponent();
                Outcome::Continue(self.to_move)
            }
        };

        debug!(?outcome, moves = self.history.len(), "Move applied");
        invariants::assert_invariants(self);

        Ok(outcome)
    }

    /// Applies a move given a raw cell index (0-8).
    ///
    /// Convenience entry point for callers holding indices rather than
    /// [`Position`] values; adds [`MoveError::OutOfBounds`] to the error
    /// set of [`GameState::make_move`].
    pub fn make_move_at(&mut self, index: usize, player: Player) -> Result<Outcome, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.make_move(Move::new(player, position))
    }

    /// Evaluates the terminal condition of the current board.
    ///
    /// Scans the winning lines in canonical order, so the lowest-indexed
    /// completed line is the one reported. Deterministic; does not mutate.
    pub fn check_terminal(&self) -> Outcome {
        match check_winner(&self.board) {
            Some((winner, line)) => Outcome::Won { winner, line },
            None if self.board.is_full() => Outcome::Draw,
            None => Outcome::Continue(self.to_move),
        }
    }

    /// Reinitializes to an empty board, X to move, game active.
    ///
    /// Score keeping lives with the session, not here, so resetting the
    /// game never touches any score.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    /// Replays moves from the initial state.
    ///
    /// Fails with the first [`MoveError`] encountered; useful for
    /// reconstructing a position from a move list.
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for mov in moves {
            game.make_move(*mov)?;
        }
        Ok(game)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
