use super::error_code::{self, LoreErrorCode};

/// Memory store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid project identifier: {project_id:?}")]
    InvalidProjectIdentifier { project_id: String },
}

impl LoreErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidProjectIdentifier { .. } => error_code::INVALID_PROJECT_ID,
        }
    }
}
