//! Move rejection errors.

use super::{Outcome, Position};
use derive_more::{Display, Error};

/// Why a placement was refused.
///
/// A refused placement never mutates the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Row or column outside `0..=2`.
    #[display("Location ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// The target square already holds a mark.
    #[display("Square {position} is already occupied")]
    CellOccupied {
        /// The occupied square.
        position: Position,
    },

    /// The game has already been won or tied.
    #[display("Game is already decided ({outcome}); call reset() to play again")]
    GameAlreadyDecided {
        /// The outcome the game froze at.
        outcome: Outcome,
    },
}
