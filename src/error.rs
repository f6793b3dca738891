use std::path::PathBuf;

use crate::board::{Pos, Stone};
use crate::game::GamePhase;
use crate::rules::TerminalResult;

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    OutOfBounds { size: usize },
    Occupied(Stone),
    EmptyStone,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::OutOfBounds { size } => {
                write!(f, "outside the {size}x{size} board")
            }
            IllegalMoveReason::Occupied(stone) => write!(f, "cell already holds {stone:?}"),
            IllegalMoveReason::EmptyStone => write!(f, "cannot place an empty stone"),
        }
    }
}

/// Errors returned by board, engine and session operations.
///
/// All of them are caller-correctable; nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board size {size} is out of range, must be {min} to {max}")]
    InvalidSize { size: usize, min: usize, max: usize },

    #[error("illegal move at {pos}: {reason}")]
    IllegalMove { pos: Pos, reason: IllegalMoveReason },

    #[error("no legal move: the board is full")]
    NoLegalMove,

    #[error("action not allowed while {phase}")]
    OutOfTurn { phase: GamePhase },

    #[error("game is over: {0}")]
    GameOver(TerminalResult),
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
