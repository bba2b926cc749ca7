//! Terminal driver for human-versus-computer tic-tac-toe.
//!
//! Presentation only: reads cell numbers from stdin, renders the board,
//! and applies the configured think delay between the human's move and
//! the computer's reply. All game logic lives in the library.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io::{self, BufRead, Write};
use tictactoe_duel::{MatchSession, MatchSettings, Outcome};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = MatchSettings::new()
        .with_difficulty(cli.difficulty)
        .with_think_delay_ms(cli.delay_ms);
    let mut session = MatchSession::new(settings);

    println!("Tic-tac-toe duel - you are X, the computer is O.");
    println!("Difficulty: {}", session.settings().difficulty());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}\n", session.game().board().display());
        print!("Your move (1-9, q to quit): ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = line.trim();

        if input.eq_ignore_ascii_case("q") {
            break;
        }

        let index = match input.parse::<usize>() {
            Ok(cell @ 1..=9) => cell - 1,
            _ => {
                println!("Enter a cell number from 1 to 9.");
                continue;
            }
        };

        let outcome = match session.human_move(index) {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let outcome = if outcome.is_terminal() {
            outcome
        } else {
            std::thread::sleep(session.settings().think_delay());
            session.computer_move()?
        };

        match outcome {
            Outcome::Continue(_) => continue,
            terminal => {
                println!("\n{}\n", session.game().board().display());
                println!("{terminal}");
                println!("{}", session.score());

                if !play_again(&mut lines)? {
                    break;
                }
                session.reset_game();
            }
        }
    }

    println!("Final score: {}", session.score());
    Ok(())
}

fn play_again(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<bool> {
    print!("Play again? (y/n): ");
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => Ok(line?.trim().eq_ignore_ascii_case("y")),
        None => Ok(false),
    }
}
