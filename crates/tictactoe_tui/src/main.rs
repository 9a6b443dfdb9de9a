//! tictactoe - two-player tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tictactoe_tui::{Cli, Command, TuiConfig, logging, script, terminal};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => {
            let config = TuiConfig::load(config.as_deref()).context("Failed to load config")?;
            logging::init_file(config.log_file(), config.log_filter())?;
            terminal::run(&config)
        }
        Command::Script { moves, log_filter } => {
            logging::init_stderr(&log_filter);
            let mut stdout = std::io::stdout().lock();
            let outcome = script::run_script(&moves, &mut stdout)?;
            writeln!(stdout, "Outcome: {}", outcome)?;
            Ok(())
        }
    }
}
