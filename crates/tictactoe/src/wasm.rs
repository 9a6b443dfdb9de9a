//! JavaScript binding for browser front ends.
//!
//! A page owns one `WasmGame` per board, forwards cell clicks to
//! `place(row, col)`, and updates the DOM from the returned events.

use super::{Game, InvalidMove};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

fn to_js_error(error: InvalidMove) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Engine handle exported to JavaScript.
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Creates a new game.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame { game: Game::new() }
    }

    /// True iff the current player may mark `(row, col)`.
    #[wasm_bindgen(js_name = canPlace)]
    pub fn can_place(&self, row: i32, col: i32) -> bool {
        self.game.can_place(row, col)
    }

    /// Places the current player's mark.
    ///
    /// Returns the two notifications as an array of
    /// `{ kind: "markPlaced" | "turnChanged" | "gameOver", ... }` objects and
    /// throws the rejection message for an invalid move.
    pub fn place(&mut self, row: i32, col: i32) -> Result<JsValue, JsValue> {
        let placement = self.game.place(row, col).map_err(to_js_error)?;
        to_value(&placement.events()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Restores the initial state.
    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// Symbol of the player to move (`"X"` or `"O"`).
    #[wasm_bindgen(js_name = currentPlayerSymbol)]
    pub fn current_player_symbol(&self) -> String {
        self.game.current_player_symbol().to_string()
    }

    /// `"Undecided"`, `"Tie"`, `"X"` or `"O"`.
    pub fn outcome(&self) -> String {
        self.game.outcome().code().to_string()
    }

    /// Row-major board as nine characters from `.`, `X`, `O`.
    pub fn board(&self) -> String {
        self.game.board().to_compact()
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
