//! Error types

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Mark;

/// Reasons a move attempt is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell {index} is outside the board")]
    OutOfBounds { index: usize },

    #[error("cell {index} is already occupied")]
    Occupied { index: usize },

    #[error("game already won by {winner}")]
    GameOver { winner: Mark },
}

/// Errors from game state transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),

    #[error("cannot jump to move {requested}: history has {len} entries")]
    InvalidJump { requested: usize, len: usize },
}

/// Errors loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level error returned by the binary
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("window error: {0}")]
    Ui(#[from] eframe::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
