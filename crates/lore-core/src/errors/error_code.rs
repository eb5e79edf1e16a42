//! LoreErrorCode trait for transport across process boundaries.

/// Every error enum implements this to provide a structured
/// error code string alongside its human-readable message.
pub trait LoreErrorCode {
    /// Returns the error code string (e.g., "INVALID_PROJECT_ID").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted wire string: `[ERROR_CODE] message`.
    fn wire_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_PROJECT_ID: &str = "INVALID_PROJECT_ID";
pub const COMPRESSION_CACHE_CORRUPT: &str = "COMPRESSION_CACHE_CORRUPT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
