//! Error types for configuration and persistence
//!
//! The simulation itself never fails; only loading tuning data and stored
//! preferences can.

use thiserror::Error;

/// Errors surfaced while loading or validating game data
#[derive(Debug, Error)]
pub enum GameError {
    /// A tuning value is out of range
    #[error("Invalid tuning: {field} {reason}")]
    InvalidTuning {
        field: &'static str,
        reason: &'static str,
    },

    /// JSON could not be parsed
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a tuning/settings file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Browser storage is unavailable or rejected the write
    #[error("Storage unavailable: {0}")]
    Storage(String),
}

impl GameError {
    pub(crate) fn tuning(field: &'static str, reason: &'static str) -> Self {
        GameError::InvalidTuning { field, reason }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
