//! Tic-tac-toe duel - human versus computer play with selectable difficulty.
//!
//! This library provides the full game engine for a human-versus-computer
//! tic-tac-toe match: the board state machine, win and draw detection, and
//! three computer-move strategies (random, mixed, and minimax-optimal).
//!
//! # Architecture
//!
//! - **Game**: board domain and the `GameState` state machine
//! - **Strategy**: computer move selection, parameterized by [`Difficulty`]
//! - **Session**: a human-versus-computer match with a running [`Score`]
//!
//! The UI is an external collaborator: it submits moves, branches on the
//! returned [`Outcome`], and requests computer replies on its own schedule.
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{Difficulty, MatchSession, MatchSettings, Outcome};
//!
//! let settings = MatchSettings::new().with_difficulty(Difficulty::Hard);
//! let mut session = MatchSession::new(settings);
//!
//! match session.human_move(4)? {
//!     Outcome::Continue(_) => {
//!         let outcome = session.computer_move()?;
//!         println!("computer replied: {outcome:?}");
//!     }
//!     outcome => println!("game over: {outcome:?}"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod session;
mod strategy;

// Crate-level exports - Board domain
pub use game::{
    Board, GameState, GameStatus, Move, MoveError, Outcome, Player, Position, Square, WIN_LINES,
};

// Crate-level exports - Invariants
pub use game::{AlternatingTurns, BalancedMarks, Invariant, MonotonicBoard, check_invariants};

// Crate-level exports - Move strategies
pub use strategy::{Difficulty, StrategyError, best_move, select_move, select_move_with};

// Crate-level exports - Session management
pub use session::{
    DEFAULT_THINK_DELAY_MS, MAX_THINK_DELAY_MS, MatchSession, MatchSettings, Score, SessionError,
};
