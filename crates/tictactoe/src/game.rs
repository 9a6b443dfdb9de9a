//! Observable game engine.
//!
//! [`Game`] owns one [`GameState`] and the observers subscribed to it. Each
//! instance is independent; nothing is shared between games.

use super::error::InvalidMove;
use super::events::{GameObserver, Placement};
use super::{Board, GameState, Outcome, Player, Position};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine with notification dispatch.
#[derive(Default)]
pub struct Game {
    state: GameState,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// Creates a new game with no observers.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes an observer; it sees every later notification.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
        debug!(observers = self.observers.len(), "Observer subscribed");
    }

    /// Builder form of [`Game::subscribe`].
    pub fn with_observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.subscribe(observer);
        self
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the outcome so far.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.state.to_move()
    }

    /// Display symbol of the player to move.
    pub fn current_player_symbol(&self) -> char {
        self.state.current_player_symbol()
    }

    /// True iff a mark may be placed at `(row, col)` right now.
    pub fn can_place(&self, row: i32, col: i32) -> bool {
        self.state.can_place(row, col)
    }

    /// Places the current player's mark and notifies observers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] and notifies nobody if the placement is refused.
    pub fn place(&mut self, row: i32, col: i32) -> Result<Placement, InvalidMove> {
        let placement = self.state.place(row, col)?;
        self.notify(&placement);
        Ok(placement)
    }

    /// Typed form of [`Game::place`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] and notifies nobody if the placement is refused.
    pub fn place_at(&mut self, position: Position) -> Result<Placement, InvalidMove> {
        let placement = self.state.place_at(position)?;
        self.notify(&placement);
        Ok(placement)
    }

    /// Restores the initial state. Observers stay subscribed.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    fn notify(&mut self, placement: &Placement) {
        for event in placement.events() {
            for observer in &mut self.observers {
                observer.on_event(&event);
            }
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
