use std::path::PathBuf;

use crate::types::Color;

/// Errors raised by the rules engine.
///
/// An illegal move is not an error: it is reported as
/// [`MoveOutcome::Rejected`](crate::types::MoveOutcome::Rejected).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("position ({row}, {col}) is outside the 8x8 board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),

    #[error("game is already over")]
    GameOver,

    #[error("it is {expected}'s turn, not {got}'s")]
    WrongTurn { expected: Color, got: Color },

    /// A capture walk did not end on the mover's own piece after the move was
    /// validated. Indicates a scanner/executor mismatch, never user input.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Rules(#[from] RulesError),
}
