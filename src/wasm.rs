//! Browser-facing wrapper around [`Game`].
//!
//! Structured results cross the boundary as plain JS objects built with
//! `serde-wasm-bindgen`; failures become `JsError`.

use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::player::create_players;
use crate::types::Color;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame { game: Game::new() }
    }

    #[wasm_bindgen(js_name = withPlayers)]
    pub fn with_players(black: &str, white: &str) -> Result<WasmGame, JsError> {
        let players = create_players(black, Color::Black, white, Color::White)?;
        Ok(WasmGame {
            game: Game::with_players(players),
        })
    }

    /// `color` is `"black"`, `"white"`, `"X"` or `"O"`.
    #[wasm_bindgen(js_name = attemptMove)]
    pub fn attempt_move(&mut self, color: &str, row: i32, col: i32) -> Result<JsValue, JsError> {
        let color: Color = color.parse()?;
        let outcome = self.game.attempt_move(color, row, col)?;
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self, color: &str) -> Result<JsValue, JsError> {
        let color: Color = color.parse()?;
        Ok(serde_wasm_bindgen::to_value(&self.game.legal_moves(color))?)
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.state())?)
    }

    pub fn render(&self) -> String {
        self.game.board().render()
    }

    #[wasm_bindgen(js_name = winnerAnnouncement)]
    pub fn winner_announcement(&self) -> Option<String> {
        self.game.winner_announcement()
    }

    #[wasm_bindgen(js_name = scoreLine)]
    pub fn score_line(&self) -> Option<String> {
        self.game.score_line()
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
