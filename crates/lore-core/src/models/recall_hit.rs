use serde::{Deserialize, Serialize};

use crate::memory::MemoryEntry;

/// One ranked result of a recall query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecallHit {
    /// Entry snapshot taken after access tracking was applied.
    pub entry: MemoryEntry,
    /// Keyword Jaccard similarity between query and entry, 0.0–1.0.
    pub relevance: f64,
    /// Linear recency term, 0.0–1.0.
    pub recency: f64,
    /// Combined ranking score, decay-weighted.
    pub score: f64,
}
