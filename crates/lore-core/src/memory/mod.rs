pub mod content;
pub mod decay_factor;
pub mod entry;
pub mod project;
pub mod semantics;

pub use content::{ContentType, MemoryContent};
pub use decay_factor::DecayFactor;
pub use entry::MemoryEntry;
pub use project::ProjectMemory;
pub use semantics::{SemanticInfo, Topic};
