//! Mixed strategy: a coin flip between optimal and random play.

use super::{StrategyError, minimax, random};
use crate::game::{Board, Player, Position};
use rand::Rng;
use tracing::debug;

/// With probability 0.5 plays the minimax-optimal move, otherwise a
/// uniform-random one.
///
/// The coin is flipped once per invocation and the chosen policy handles
/// the whole selection.
pub(super) fn mixed_move<R: Rng>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Result<Position, StrategyError> {
    if rng.gen_bool(0.5) {
        debug!("Mixed strategy delegating to optimal");
        minimax::best_move(board, player)
    } else {
        debug!("Mixed strategy delegating to random");
        random::random_move(board, rng)
    }
}
