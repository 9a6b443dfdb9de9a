//! Game state value: board, player to move and outcome.

use super::error::InvalidMove;
use super::events::{Continuation, Placement};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules;
use super::{Board, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Complete game state.
///
/// Created with an empty board, X to move and an undecided outcome. Only
/// [`GameState::place`] mutates it during play; once the outcome is decided
/// it accepts no further placements until [`GameState::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Player,
    outcome: Outcome,
}

impl GameState {
    /// Creates a new game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: Outcome::Undecided,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// Once the game is decided this stays at the player who made the
    /// final mark.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the outcome so far.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game has been won or tied.
    pub fn is_decided(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Display symbol of the player to move.
    pub fn current_player_symbol(&self) -> char {
        self.to_move.symbol()
    }

    /// True iff `(row, col)` is on the board, empty, and the game is undecided.
    pub fn can_place(&self, row: i32, col: i32) -> bool {
        self.validate(row, col).is_ok()
    }

    /// Checks a requested location without touching the state.
    ///
    /// Bounds are checked first, then the outcome, then occupancy.
    pub fn validate(&self, row: i32, col: i32) -> Result<Position, InvalidMove> {
        let position =
            Position::from_row_col(row, col).ok_or(InvalidMove::OutOfBounds { row, col })?;
        self.validate_position(position)?;
        Ok(position)
    }

    fn validate_position(&self, position: Position) -> Result<(), InvalidMove> {
        if self.outcome.is_decided() {
            return Err(InvalidMove::GameAlreadyDecided {
                outcome: self.outcome,
            });
        }
        if !self.board.is_empty(position) {
            return Err(InvalidMove::CellOccupied { position });
        }
        Ok(())
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] without changing anything if the location is
    /// off the board, the square is taken, or the game is already decided.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn place(&mut self, row: i32, col: i32) -> Result<Placement, InvalidMove> {
        let position = self.validate(row, col).inspect_err(|e| {
            warn!(error = %e, "Placement rejected");
        })?;
        Ok(self.apply(position))
    }

    /// Places the current player's mark at a typed position.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::CellOccupied`] or
    /// [`InvalidMove::GameAlreadyDecided`]; never `OutOfBounds`.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn place_at(&mut self, position: Position) -> Result<Placement, InvalidMove> {
        self.validate_position(position).inspect_err(|e| {
            warn!(error = %e, "Placement rejected");
        })?;
        Ok(self.apply(position))
    }

    /// Writes the mark, evaluates the board, then toggles or freezes.
    fn apply(&mut self, position: Position) -> Placement {
        let player = self.to_move;
        self.board.set(position, Square::Occupied(player));

        let outcome = rules::evaluate(&self.board);
        let continuation = if outcome.is_decided() {
            self.outcome = outcome;
            debug!(%outcome, "Game decided");
            Continuation::Finished(outcome)
        } else {
            self.to_move = player.opponent();
            Continuation::NextTurn(self.to_move)
        };

        debug_assert!(
            TicTacToeInvariants::check_all(self).is_ok(),
            "Invariant violated after placing at {}",
            position
        );

        Placement {
            position,
            player,
            continuation,
        }
    }

    /// Restores the initial configuration.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.board.clear();
        self.to_move = Player::X;
        self.outcome = Outcome::Undecided;
    }

    /// Builds a state from raw parts without validation.
    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, to_move: Player, outcome: Outcome) -> Self {
        Self {
            board,
            to_move,
            outcome,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.to_move(), Player::X);
        assert_eq!(state.outcome(), Outcome::Undecided);
        assert_eq!(state.current_player_symbol(), 'X');
    }

    #[test]
    fn test_place_toggles_turn() {
        let mut state = GameState::new();
        let placement = state.place(1, 1).unwrap();
        assert_eq!(placement.position, Position::Center);
        assert_eq!(placement.player, Player::X);
        assert_eq!(placement.continuation, Continuation::NextTurn(Player::O));
        assert_eq!(state.to_move(), Player::O);
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_rejected_move_leaves_state_untouched() {
        let mut state = GameState::new();
        state.place(0, 0).unwrap();
        let before = state.clone();

        assert_eq!(
            state.place(0, 0),
            Err(InvalidMove::CellOccupied {
                position: Position::TopLeft
            })
        );
        assert_eq!(
            state.place(-1, 4),
            Err(InvalidMove::OutOfBounds { row: -1, col: 4 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_bounds_checked_before_outcome() {
        let mut state = GameState::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            state.place(row, col).unwrap();
        }
        assert!(state.is_decided());
        assert_eq!(
            state.place(5, 5),
            Err(InvalidMove::OutOfBounds { row: 5, col: 5 })
        );
        assert_eq!(
            state.place(2, 2),
            Err(InvalidMove::GameAlreadyDecided {
                outcome: Outcome::Winner(Player::X)
            })
        );
    }

    #[test]
    fn test_place_at_typed_position() {
        let mut state = GameState::new();
        state.place_at(Position::BottomRight).unwrap();
        assert!(matches!(
            state.place_at(Position::BottomRight),
            Err(InvalidMove::CellOccupied { .. })
        ));
    }

    #[test]
    fn test_winning_move_freezes_turn() {
        let mut state = GameState::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
            state.place(row, col).unwrap();
        }
        let placement = state.place(0, 2).unwrap();
        assert_eq!(
            placement.continuation,
            Continuation::Finished(Outcome::Winner(Player::X))
        );
        assert_eq!(state.to_move(), Player::X);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = GameState::new();
        state.place(2, 2).unwrap();
        state.reset();
        assert_eq!(state, GameState::new());
    }
}
