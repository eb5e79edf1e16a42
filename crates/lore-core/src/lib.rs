//! # lore-core
//!
//! Foundation crate for the Lore project-memory system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod memory;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LoreConfig;
pub use errors::{LoreError, LoreResult};
pub use memory::{ContentType, MemoryContent, MemoryEntry, ProjectMemory, SemanticInfo, Topic};
