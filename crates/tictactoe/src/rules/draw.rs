//! Tie detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::super::win::check_winner;
    use super::*;

    fn is_tie(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    fn fill(marks: [Player; 9]) -> Board {
        let mut board = Board::new();
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_tie(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        use Player::{O, X};
        // X X O / O O X / X O X
        let board = fill([X, X, O, O, O, X, X, O, X]);
        assert!(is_full(&board));
        assert!(is_tie(&board));
    }

    #[test]
    fn test_not_tie_if_winner() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = fill([X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
