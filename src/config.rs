use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::player::{Player, Players};
use crate::types::Color;

/// Game setup, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Color that must open. `None` lets whichever color moves first open.
    pub first_player: Option<Color>,
    /// Reject moves by the color that is not awaited.
    pub strict_turns: bool,
    /// Empty, or exactly one player per color.
    pub players: Vec<Player>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_player: None,
            strict_turns: true,
            players: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.iter().any(|p| p.name().trim().is_empty()) {
            return Err(ConfigError::Validation(
                "player names must not be empty".into(),
            ));
        }
        self.players()?;
        Ok(())
    }

    /// The configured players, if any.
    pub fn players(&self) -> Result<Option<Players>, ConfigError> {
        match self.players.as_slice() {
            [] => Ok(None),
            [a, b] => Ok(Some(Players::pair(a.clone(), b.clone())?)),
            other => Err(ConfigError::Validation(format!(
                "expected 0 or 2 players, got {}",
                other.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulesError;

    #[test]
    fn empty_document_uses_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();

        assert_eq!(config, GameConfig::default());
        assert!(config.strict_turns);
        assert!(config.players().unwrap().is_none());
    }

    #[test]
    fn full_document_parses() {
        let config = GameConfig::from_toml_str(
            r#"
            first_player = "white"
            strict_turns = false

            [[players]]
            name = "Helen"
            color = "white"

            [[players]]
            name = "Leo"
            color = "black"
            "#,
        )
        .unwrap();

        assert_eq!(config.first_player, Some(Color::White));
        assert!(!config.strict_turns);
        let players = config.players().unwrap().unwrap();
        assert_eq!(players.get(Color::Black).name(), "Leo");
    }

    #[test]
    fn duplicate_colors_fail_validation() {
        let err = GameConfig::from_toml_str(
            r#"
            [[players]]
            name = "Helen"
            color = "black"

            [[players]]
            name = "Leo"
            color = "black"
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Rules(RulesError::InvalidColor(_))
        ));
    }

    #[test]
    fn unknown_color_is_a_parse_error() {
        let err = GameConfig::from_toml_str(
            r#"
            first_player = "red"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn wrong_player_count_fails_validation() {
        let err = GameConfig::from_toml_str(
            r#"
            [[players]]
            name = "Helen"
            color = "black"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GameConfig::load(Path::new("does/not/exist.toml")).unwrap_err();

        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
