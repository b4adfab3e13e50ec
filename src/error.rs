use crate::session::Phase;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    Start,
    Cancel,
    Restart,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot {action} while the game is {phase}")]
    InvalidTransition { action: Action, phase: Phase },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("sequence length must be at least 1")]
    EmptySequence,
    #[error("tick rate must be greater than 0 ms")]
    ZeroTickRate,
    #[error("failed to write config to {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode config")]
    Json(#[from] serde_json::Error),
}
