//! # lore-store
//!
//! The memory store: owns every project's entries and the knowledge graph,
//! and composes semantic extraction, importance scoring, recall ranking, and
//! decay into the store-level operations.
//!
//! The store is a plain `&mut self` value. Serialization of concurrent callers
//! is the runtime's job.

pub mod stats;
pub mod store;
pub mod validation;

pub use stats::StoreStats;
pub use store::MemoryStore;
