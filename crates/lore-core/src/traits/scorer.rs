use crate::memory::{MemoryContent, SemanticInfo};

/// Static importance assigned to an entry at creation.
pub trait IImportanceScorer: Send + Sync {
    /// Returns a value in [0.0, 1.0].
    fn score(&self, content: &MemoryContent, semantics: &SemanticInfo) -> f64;
}
