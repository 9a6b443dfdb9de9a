//! Tic-tac-toe game engine.
//!
//! The engine owns board state, enforces move legality, detects wins and
//! ties, and alternates turns. It performs no I/O: front ends drive it
//! through [`Game`] and react to the [`GameEvent`]s it raises.
//!
//! # Architecture
//!
//! - **State**: [`GameState`], a plain value holding board, turn and outcome
//! - **Rules**: pure win/tie evaluation over a [`Board`]
//! - **Events**: typed notifications and the [`GameObserver`] trait
//! - **Invariants**: composable consistency checks asserted in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, Outcome, Player};
//!
//! let mut game = Game::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     game.place(row, col)?;
//! }
//! assert_eq!(game.outcome(), Outcome::Winner(Player::X));
//! assert!(!game.can_place(2, 2));
//! # Ok::<(), tictactoe::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(feature = "wasm"), forbid(unsafe_code))]

mod error;
mod events;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::InvalidMove;
pub use events::{Continuation, GameEvent, GameObserver, Placement, TracingObserver};
pub use game::Game;
pub use position::Position;
pub use state::GameState;
pub use types::{Board, Outcome, Player, Square};

#[cfg(feature = "wasm")]
pub use wasm::WasmGame;
