//! Mark balance invariant: X never falls behind O, and never leads by two.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
