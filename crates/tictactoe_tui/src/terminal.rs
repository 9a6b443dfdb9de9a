//! Interactive terminal session.

use crate::app::{App, AppAction};
use crate::config::{Palette, TuiConfig};
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode and the alternate screen, held for the life of the session.
///
/// Dropping the guard restores the terminal, so early returns and panics
/// leave the shell usable.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal() {
            error!(error = ?err, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen. Safe to call more than once.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Restores the terminal before the default hook prints the panic message.
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        hook(info);
    }));
}

/// Runs the game until the user quits; the terminal is restored on exit.
///
/// # Errors
///
/// Fails on an invalid theme or a terminal I/O error.
#[instrument(skip_all)]
pub fn run(config: &TuiConfig) -> Result<()> {
    let palette = config.palette().context("Invalid theme")?;
    info!("Starting terminal UI");

    install_panic_hook();
    let guard = TerminalGuard::enter().context("Failed to enter terminal session")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new();
    let res = run_loop(&mut terminal, &mut app, &palette);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_loop(terminal: &mut Tui, app: &mut App, palette: &Palette) -> Result<()> {
    loop {
        terminal.draw(|frame| crate::ui::draw(frame, app, palette))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) == AppAction::Quit {
                return Ok(());
            }
        }
    }
}
