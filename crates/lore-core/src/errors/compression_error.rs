use super::error_code::{self, LoreErrorCode};

/// Context compression errors.
#[derive(Debug, thiserror::Error)]
pub enum CompressionError {
    #[error("compression cache corrupt for {id}: {reason}")]
    CacheCorrupt { id: String, reason: String },
}

impl LoreErrorCode for CompressionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CacheCorrupt { .. } => error_code::COMPRESSION_CACHE_CORRUPT,
        }
    }
}
