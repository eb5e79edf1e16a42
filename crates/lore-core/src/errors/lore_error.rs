use super::error_code::{self, LoreErrorCode};
use super::{CompressionError, ConfigError, StoreError};

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum LoreError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LoreErrorCode for LoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Store(e) => e.error_code(),
            Self::Compression(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

/// Result alias used across the workspace.
pub type LoreResult<T> = Result<T, LoreError>;
