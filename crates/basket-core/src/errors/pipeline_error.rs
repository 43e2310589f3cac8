//! Top-level error for an end-to-end analysis run.

use super::error_code::BasketErrorCode;
use super::{ConfigError, EncodeError, MiningError};

/// Errors that can occur during an analysis run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Mining error: {0}")]
    Mining(#[from] MiningError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BasketErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Encode(e) => e.error_code(),
            Self::Mining(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

impl PipelineError {
    /// Whether the run stopped because a cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Mining(MiningError::Cancelled))
    }
}
