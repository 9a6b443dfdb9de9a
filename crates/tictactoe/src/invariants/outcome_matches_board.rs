//! Outcome consistency invariant: the stored outcome is what the board says.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: the recorded outcome equals a fresh evaluation of the board.
pub struct OutcomeMatchesBoardInvariant;

impl Invariant<GameState> for OutcomeMatchesBoardInvariant {
    fn holds(state: &GameState) -> bool {
        rules::evaluate(state.board()) == state.outcome()
    }

    fn description() -> &'static str {
        "Recorded outcome matches the board"
    }
}
