//! Error type shared by the engine, metric and dataset loader.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FisError {
    /// Caller-supplied data the metric or batch evaluator cannot use.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("dataset read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset parse failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl FisError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        FisError::InvalidInput(msg.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, FisError::InvalidInput(_))
    }
}
