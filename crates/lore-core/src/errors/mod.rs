//! Error handling for Lore.
//! One error enum per subsystem, `thiserror` only.

pub mod compression_error;
pub mod config_error;
pub mod error_code;
pub mod lore_error;
pub mod store_error;

pub use compression_error::CompressionError;
pub use config_error::ConfigError;
pub use error_code::LoreErrorCode;
pub use lore_error::{LoreError, LoreResult};
pub use store_error::StoreError;
