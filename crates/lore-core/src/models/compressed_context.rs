use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-form text block submitted for compression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextInput {
    /// Cache key. Repeated requests with the same id return the cached result.
    pub id: String,
    pub content: String,
}

impl ContextInput {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// Compressed form of a [`ContextInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressedContext {
    pub id: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub decisions: Vec<String>,
    pub action_items: Vec<String>,
    pub entities: Vec<String>,
    pub original_length: usize,
    /// `len(summary) / max(1, len(original))`.
    pub compression_ratio: f64,
    pub processing_time: Duration,
    pub compressed_at: DateTime<Utc>,
}
