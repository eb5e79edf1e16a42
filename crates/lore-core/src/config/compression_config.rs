use serde::{Deserialize, Serialize};

use super::defaults;

/// Context compression configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    /// Maximum number of cached compressed contexts.
    pub cache_capacity: u64,
    /// Cap on extracted key points.
    pub max_key_points: usize,
    /// Key points included in the summary.
    pub summary_key_points: usize,
    /// Decisions included in the summary.
    pub summary_decisions: usize,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            cache_capacity: defaults::DEFAULT_COMPRESSION_CACHE_CAPACITY,
            max_key_points: defaults::DEFAULT_MAX_KEY_POINTS,
            summary_key_points: defaults::DEFAULT_SUMMARY_KEY_POINTS,
            summary_decisions: defaults::DEFAULT_SUMMARY_DECISIONS,
        }
    }
}
