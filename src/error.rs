//! Error types

use std::path::PathBuf;

use crate::board::{Phase, Pos};

/// Reasons a move is rejected before it touches the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece #{index} in the roster (size {roster})")]
    NoSuchPiece { index: usize, roster: usize },

    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: u8, col: u8, size: usize },

    #[error("cell {0} is occupied")]
    Occupied(Pos),

    #[error("piece #{0} is already on the board")]
    AlreadyPlaced(usize),

    #[error("piece #{0} has not been placed yet")]
    NotPlaced(usize),

    #[error("piece #{index} is not at {claimed}")]
    WrongSource { index: usize, claimed: Pos },

    #[error("piece #{index} cannot move from {from} to {to}")]
    IllegalDestination { index: usize, from: Pos, to: Pos },

    #[error("move does not fit the {0} phase")]
    WrongPhase(Phase),

    #[error("the game is over")]
    GameOver,
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
}
