//! Command-line interface for the tic-tac-toe duel driver.

use clap::Parser;
use tictactoe_duel::Difficulty;

/// Tic-tac-toe duel - play against the computer in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_duel")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Computer difficulty: easy, medium, or hard
    #[arg(short, long, default_value = "medium")]
    pub difficulty: Difficulty,

    /// Delay in milliseconds before the computer replies (0-5000)
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,
}
