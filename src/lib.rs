//! Rules engine for Othello (Reversi) on the standard 8x8 board.
//!
//! [`Game`] validates moves, flips captured pieces, tracks piece counts and
//! detects the end of the game. The lower-level pieces live in [`rules`] and
//! operate on a borrowed [`Board`].

use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod rules;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::GameConfig;
pub use error::{ConfigError, RulesError};
pub use game::Game;
pub use player::{Player, Players, create_players};
pub use types::{
    Cell, Color, Direction, DirectionSet, GameState, MoveOutcome, PieceCount, Position, Status,
    Winner,
};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
