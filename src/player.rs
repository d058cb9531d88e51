use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::types::Color;

/// A named participant playing one color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Both participants of one game, one per color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Players {
    black: Player,
    white: Player,
}

impl Players {
    pub fn get(&self, color: Color) -> &Player {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    /// Pairs two players, which must hold distinct colors.
    pub fn pair(a: Player, b: Player) -> Result<Self, RulesError> {
        match (a.color, b.color) {
            (Color::Black, Color::White) => Ok(Self { black: a, white: b }),
            (Color::White, Color::Black) => Ok(Self { black: b, white: a }),
            (color, _) => Err(RulesError::InvalidColor(format!(
                "both players chose {color}"
            ))),
        }
    }
}

/// Registers the two players of a game.
pub fn create_players(
    name_a: &str,
    color_a: Color,
    name_b: &str,
    color_b: Color,
) -> Result<Players, RulesError> {
    Players::pair(Player::new(name_a, color_a), Player::new(name_b, color_b))
}
