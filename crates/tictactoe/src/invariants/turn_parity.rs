//! Turn parity invariant: the player to move follows from the mark counts.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: while undecided, X is to move iff both players have the same
/// number of marks. Once decided, the player to move is frozen at whoever
/// made the final mark.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        let next = if x == o { Player::X } else { Player::O };

        let expected = if state.is_decided() {
            next.opponent()
        } else {
            next
        };

        state.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Outcome};

    #[test]
    fn test_holds_through_alternation() {
        let mut state = GameState::new();
        for (row, col) in [(0, 0), (1, 1), (2, 2), (0, 2)] {
            state.place(row, col).unwrap();
            assert!(TurnParityInvariant::holds(&state));
        }
        assert_eq!(state.to_move(), Player::X);
    }

    #[test]
    fn test_holds_after_win() {
        let mut state = GameState::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            state.place(row, col).unwrap();
        }
        assert!(state.is_decided());
        assert!(TurnParityInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let state = GameState::from_parts(Board::new(), Player::O, Outcome::Undecided);
        assert!(!TurnParityInvariant::holds(&state));
    }
}
