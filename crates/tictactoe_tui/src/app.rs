//! Application state and key handling.

use crate::input::{digit_position, move_cursor};
use crate::messages::{describe, game_over_message, turn_message};
use crossterm::event::KeyCode;
use tictactoe::{Game, GameEvent, Position, TracingObserver};
use tracing::{debug, info, instrument};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    status_message: String,
    last_move: Option<String>,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        let game = Game::new().with_observer(TracingObserver);
        Self {
            status_message: turn_message(game.to_move()),
            game,
            cursor: Position::Center,
            last_move: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Description of the most recent mark, if any.
    pub fn last_move(&self) -> Option<&str> {
        self.last_move.as_deref()
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place_at(self.cursor),
            KeyCode::Char(c) => {
                if let Some(position) = digit_position(c) {
                    self.cursor = position;
                    self.place_at(position);
                }
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Asks the engine to mark `position` and reflects the result.
    pub fn place_at(&mut self, position: Position) {
        match self.game.place(position.row(), position.col()) {
            Ok(placement) => {
                for event in placement.events() {
                    self.handle_event(&event);
                }
            }
            Err(e) => {
                debug!(error = %e, "Move refused");
                self.status_message = format!("Invalid move: {}", e);
            }
        }
    }

    fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::MarkPlaced { .. } => self.last_move = Some(describe(event)),
            GameEvent::TurnChanged { player } => self.status_message = turn_message(*player),
            GameEvent::GameOver { outcome } => {
                self.status_message = format!(
                    "{} Press 'r' to play again or 'q' to quit.",
                    game_over_message(*outcome)
                );
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
        self.last_move = None;
        self.status_message = turn_message(self.game.to_move());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
