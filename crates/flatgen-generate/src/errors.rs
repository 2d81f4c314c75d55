use thiserror::Error;

use crate::state::RunState;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("illegal state transition from {from} to {to}")]
    IllegalTransition { from: RunState, to: RunState },
    #[error("core error: {0}")]
    Core(#[from] flatgen_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
