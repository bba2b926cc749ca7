//! First-class invariants for the game state machine.
//!
//! Invariants are logical properties that must hold after every applied
//! move. They are testable independently and serve as documentation of
//! the guarantees the engine maintains.

use super::engine::{GameState, GameStatus};
use super::types::{Board, Player, Square};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: players alternate turns.
///
/// Move history must show X, O, X, O, ... and, while the game is live,
/// the player to move must match the history's parity.
pub struct AlternatingTurns;

impl Invariant<GameState> for AlternatingTurns {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        if game.status() == GameStatus::InProgress {
            let expected_next = if history.len() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            return game.to_move() == expected_next;
        }

        true
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Invariant: board squares are monotonic (never overwritten).
///
/// Replaying the move history must reproduce the board exactly, with
/// every move landing on an empty square.
pub struct MonotonicBoard;

impl Invariant<GameState> for MonotonicBoard {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

/// Invariant: mark counts stay balanced.
///
/// X moves first, so the number of X marks minus the number of O marks
/// is always 0 or 1.
pub struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(game: &GameState) -> bool {
        let x_count = game.board().count_of(Player::X);
        let o_count = game.board().count_of(Player::O);
        x_count >= o_count && x_count - o_count <= 1
    }

    fn description() -> &'static str {
        "X marks minus O marks is 0 or 1"
    }
}

/// Checks all game invariants, collecting the descriptions of any that
/// fail.
pub fn check_invariants(game: &GameState) -> Result<(), Vec<&'static str>> {
    let mut violations = Vec::new();

    if !AlternatingTurns::holds(game) {
        violations.push(AlternatingTurns::description());
    }
    if !MonotonicBoard::holds(game) {
        violations.push(MonotonicBoard::description());
    }
    if !BalancedMarks::holds(game) {
        violations.push(BalancedMarks::description());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        warn!(?violations, "Game invariants violated");
        Err(violations)
    }
}

/// Asserts that all game invariants hold (panics on violation in debug
/// builds only).
pub(super) fn assert_invariants(game: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = check_invariants(game)
    {
        panic!("game invariants violated: {violations:?}");
    }
}
