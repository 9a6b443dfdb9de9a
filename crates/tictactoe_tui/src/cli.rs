//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players sharing a terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file (defaults to tictactoe.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply a sequence of moves and print what happened
    Script {
        /// Moves as `row,col` (e.g. `1,1`), a square number 1-9, or a label
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,

        /// Log filter when RUST_LOG is unset
        #[arg(long, default_value = "warn")]
        log_filter: String,
    },
}
