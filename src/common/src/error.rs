use std::time::Duration;

use thiserror::Error;

use crate::model::round::Phase;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A move was submitted outside [`Phase::Idle`]. State is left untouched.
    #[error("a move was already played this round (round is {phase})")]
    InvalidTransition { phase: Phase },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("tick of {tick:?} is longer than the {suspense:?} suspense")]
    TickExceedsSuspense { tick: Duration, suspense: Duration },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{input}' is not a move, expected rock, paper or scissors")]
pub struct ParseMoveError {
    pub input: String,
}

#[derive(Debug, Error)]
pub enum ParseInputError {
    #[error("unknown command '{input}', try rock, paper, scissors, new or quit")]
    Unknown { input: String },

    #[error("malformed input: {0}")]
    Json(#[from] serde_json::Error),
}
