//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are separated from board storage
//! so the engine and the invariant checks evaluate positions the same way.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies a board: a completed line wins, a full board without one ties.
///
/// The tie check only runs when no line has been completed.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return Outcome::Winner(winner);
    }
    if is_full(board) {
        return Outcome::Tie;
    }
    Outcome::Undecided
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(evaluate(&Board::new()), Outcome::Undecided);
    }

    #[test]
    #[rustfmt::skip]
    fn test_evaluate_prefers_winner_on_full_board() {
        // X X X / O O X / X O O  - full, but X holds the top row
        let marks = [
            Player::X, Player::X, Player::X,
            Player::O, Player::O, Player::X,
            Player::X, Player::O, Player::O,
        ];
        let mut board = Board::new();
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(player));
        }
        assert_eq!(evaluate(&board), Outcome::Winner(Player::X));
    }
}
