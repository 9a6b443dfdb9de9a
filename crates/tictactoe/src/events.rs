//! Notifications raised by the engine.
//!
//! Every successful placement produces exactly two events: a
//! [`GameEvent::MarkPlaced`] followed by either [`GameEvent::TurnChanged`]
//! or [`GameEvent::GameOver`]. The same pair is returned to the caller in a
//! [`Placement`] and delivered, in order, to each subscribed
//! [`GameObserver`]. Rejected placements raise nothing.

use super::{Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Something that happened in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GameEvent {
    /// A player's mark was written to the board.
    MarkPlaced {
        /// Where the mark went.
        position: Position,
        /// Who placed it.
        player: Player,
        /// The mark's display symbol.
        symbol: char,
    },
    /// The game continues and it is now `player`'s turn.
    TurnChanged {
        /// The player now to move.
        player: Player,
    },
    /// The game reached a terminal outcome.
    GameOver {
        /// Final outcome; never `Undecided`.
        outcome: Outcome,
    },
}

/// What the engine did after the mark went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continuation {
    /// Play passes to this player.
    NextTurn(Player),
    /// The game froze at this outcome.
    Finished(Outcome),
}

/// Result of a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The square that was marked.
    pub position: Position,
    /// The player whose mark was placed.
    pub player: Player,
    /// Turn change or game over.
    pub continuation: Continuation,
}

impl Placement {
    /// Outcome after this placement (`Undecided` if play continues).
    pub fn outcome(&self) -> Outcome {
        match self.continuation {
            Continuation::NextTurn(_) => Outcome::Undecided,
            Continuation::Finished(outcome) => outcome,
        }
    }

    /// The two notifications for this placement, in firing order.
    pub fn events(&self) -> [GameEvent; 2] {
        let placed = GameEvent::MarkPlaced {
            position: self.position,
            player: self.player,
            symbol: self.player.symbol(),
        };
        let follow_up = match self.continuation {
            Continuation::NextTurn(player) => GameEvent::TurnChanged { player },
            Continuation::Finished(outcome) => GameEvent::GameOver { outcome },
        };
        [placed, follow_up]
    }
}

/// Receives engine notifications.
///
/// Implemented for any `FnMut(&GameEvent)` closure.
pub trait GameObserver {
    /// Called once per event, in firing order.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Observer that reports every notification through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::MarkPlaced {
                position,
                player,
                symbol,
            } => debug!(%position, %player, %symbol, "Mark placed"),
            GameEvent::TurnChanged { player } => {
                debug!(%player, symbol = %player.symbol(), "Turn changed")
            }
            GameEvent::GameOver { outcome } => match outcome {
                Outcome::Winner(player) => info!(%player, "{} wins!", player),
                Outcome::Tie => info!("It was a tie."),
                Outcome::Undecided => {}
            },
        }
    }
}
