//! Player-facing wording for engine notifications.

use tictactoe::{GameEvent, Outcome, Player};

/// Whose turn it is, e.g. `"Player 1: X's"`.
pub fn turn_message(player: Player) -> String {
    format!("{}: {}'s", player, player.symbol())
}

/// Announcement for a finished game.
pub fn game_over_message(outcome: Outcome) -> String {
    match outcome {
        Outcome::Winner(player) => format!("{} wins!", player),
        Outcome::Tie => "It was a tie.".to_string(),
        Outcome::Undecided => "Game in progress.".to_string(),
    }
}

/// One line describing an event.
pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::MarkPlaced {
            position, symbol, ..
        } => format!("{} placed at {}", symbol, position),
        GameEvent::TurnChanged { player } => turn_message(*player),
        GameEvent::GameOver { outcome } => game_over_message(*outcome),
    }
}
