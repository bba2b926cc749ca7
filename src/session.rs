//! Match session management: a human (X) versus the computer (O).
//!
//! The session owns the running [`Score`], which survives game resets,
//! and drives move application for both seats. The engine itself never
//! sleeps; the configured think delay is exposed for the driving UI to
//! apply between the human's move and the computer's reply.

use crate::game::{GameState, Move, MoveError, Outcome, Player};
use crate::strategy::{self, Difficulty, StrategyError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Longest accepted think delay, in milliseconds.
pub const MAX_THINK_DELAY_MS: u64 = 5000;

/// Think delay used when none (or an out-of-range one) is configured.
pub const DEFAULT_THINK_DELAY_MS: u64 = 500;

/// Session score: wins for each seat plus draws.
///
/// Counters persist across game resets and are only cleared by
/// [`Score::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    player_wins: u32,
    computer_wins: u32,
    draws: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for the human player (X).
    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    /// Wins recorded for the computer (O).
    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }

    /// Draws recorded.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Records a terminal outcome; `Continue` outcomes are ignored.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Won {
                winner: Player::X, ..
            } => self.player_wins += 1,
            Outcome::Won {
                winner: Player::O, ..
            } => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Continue(_) => {}
        }
    }

    /// Zeroes all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You {} - Computer {} - Draws {}",
            self.player_wins, self.computer_wins, self.draws
        )
    }
}

/// User-configurable settings for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSettings {
    difficulty: Difficulty,
    think_delay: Duration,
}

impl MatchSettings {
    /// Creates settings with the default difficulty (`medium`) and think
    /// delay (500 ms).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the think delay in milliseconds.
    ///
    /// Values above [`MAX_THINK_DELAY_MS`] fall back to the default,
    /// matching the operator-input validation of the game UI.
    pub fn with_think_delay_ms(mut self, millis: u64) -> Self {
        if millis > MAX_THINK_DELAY_MS {
            warn!(millis, "Think delay out of range, using default");
            self.think_delay = Duration::from_millis(DEFAULT_THINK_DELAY_MS);
        } else {
            self.think_delay = Duration::from_millis(millis);
        }
        self
    }

    /// Returns the configured difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the artificial delay a UI should apply before requesting
    /// the computer's reply. The engine itself never sleeps.
    pub fn think_delay(&self) -> Duration {
        self.think_delay
    }
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            think_delay: Duration::from_millis(DEFAULT_THINK_DELAY_MS),
        }
    }
}

/// Error that can occur while driving a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// A computer move was requested when it is not O's turn.
    #[display("It is not the computer's turn")]
    NotComputersTurn,

    /// The strategy could not produce a move.
    #[display("{}", _0)]
    Strategy(StrategyError),

    /// The selected move was rejected by the engine.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for SessionError {}

impl From<StrategyError> for SessionError {
    fn from(err: StrategyError) -> Self {
        SessionError::Strategy(err)
    }
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

/// A human-versus-computer match.
///
/// The human always plays X and moves first; the computer plays O.
#[derive(Debug, Clone)]
pub struct MatchSession {
    game: GameState,
    score: Score,
    settings: MatchSettings,
}

impl MatchSession {
    /// Creates a new match with the given settings.
    #[instrument]
    pub fn new(settings: MatchSettings) -> Self {
        info!(difficulty = %settings.difficulty(), "Creating match session");
        Self {
            game: GameState::new(),
            score: Score::new(),
            settings,
        }
    }

    /// Returns the current game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Returns the running score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Returns the match settings.
    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Changes the difficulty and resets the game in progress.
    ///
    /// The score is kept; a difficulty change only abandons the current
    /// board.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(%difficulty, "Difficulty changed, resetting game");
        self.settings.difficulty = difficulty;
        self.game.reset();
    }

    /// Applies the human's move at the given cell index (0-8).
    ///
    /// Terminal outcomes are recorded into the score.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let outcome = self.game.make_move_at(index, Player::X).inspect_err(|err| {
            debug!(index, %err, "Human move rejected");
        })?;
        self.score.record(&outcome);
        Ok(outcome)
    }

    /// Selects and applies the computer's move at the configured
    /// difficulty.
    ///
    /// Terminal outcomes are recorded into the score.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotComputersTurn`] unless the game is live and O
    /// is to move; strategy and engine errors are forwarded.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<Outcome, SessionError> {
        if !self.game.is_active() || self.game.to_move() != Player::O {
            warn!(
                to_move = ?self.game.to_move(),
                active = self.game.is_active(),
                "Computer move requested out of turn"
            );
            return Err(SessionError::NotComputersTurn);
        }

        let position =
            strategy::select_move(self.game.board(), Player::O, self.settings.difficulty)?;
        let outcome = self.game.make_move(Move::new(Player::O, position))?;
        self.score.record(&outcome);

        debug!(?position, ?outcome, "Computer moved");
        Ok(outcome)
    }

    /// Starts a new game; the score is kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.game.reset();
    }

    /// Zeroes the score and starts a new game.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        info!("Resetting score");
        self.score.reset();
        self.game.reset();
    }
}
