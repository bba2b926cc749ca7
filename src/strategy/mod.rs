//! Computer move selection, parameterized by difficulty.
//!
//! Each strategy is a pure function from a board and the computer's mark
//! to a position. Strategies never mutate the caller's board and never
//! panic; a board with no open square yields
//! [`StrategyError::NoMoveAvailable`].

mod minimax;
mod mixed;
mod random;

pub use minimax::best_move;

use crate::game::{Board, Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Computer difficulty level.
///
/// Maps onto the three move policies: `easy` plays uniformly at random,
/// `medium` mixes random and optimal play 50/50, `hard` plays the
/// minimax-optimal move and never loses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Uniform-random moves.
    Easy,
    /// 50/50 mix of random and optimal moves.
    #[default]
    Medium,
    /// Minimax-optimal moves.
    Hard,
}

/// Error that can occur when selecting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StrategyError {
    /// The board has no open square.
    ///
    /// Requesting a move on a terminal board is a caller contract
    /// violation, reported as a value rather than a panic.
    #[display("No open square is available")]
    NoMoveAvailable,
}

impl std::error::Error for StrategyError {}

/// Selects a move for `player` at the given difficulty.
///
/// Uses the thread-local RNG; see [`select_move_with`] to inject one.
pub fn select_move(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
) -> Result<Position, StrategyError> {
    select_move_with(board, player, difficulty, &mut rand::thread_rng())
}

/// Selects a move for `player` at the given difficulty, drawing any
/// randomness from the supplied RNG.
#[instrument(skip(board, rng))]
pub fn select_move_with<R: Rng>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Position, StrategyError> {
    match difficulty {
        Difficulty::Easy => random::random_move(board, rng),
        Difficulty::Medium => mixed::mixed_move(board, player, rng),
        Difficulty::Hard => minimax::best_move(board, player),
    }
}
