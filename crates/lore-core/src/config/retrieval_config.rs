use serde::{Deserialize, Serialize};

use super::defaults;

/// Recall ranking configuration.
///
/// `score = (relevance_weight × relevance + recency_weight × recency
///           + importance_weight × importance) × decay_factor`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Weight of keyword Jaccard similarity.
    pub relevance_weight: f64,
    /// Weight of the linear recency term.
    pub recency_weight: f64,
    /// Weight of the static importance score.
    pub importance_weight: f64,
    /// Days after which recency reaches zero.
    pub recency_window_days: f64,
    /// Limit used when callers do not supply one.
    pub default_limit: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            relevance_weight: defaults::DEFAULT_RELEVANCE_WEIGHT,
            recency_weight: defaults::DEFAULT_RECENCY_WEIGHT,
            importance_weight: defaults::DEFAULT_IMPORTANCE_WEIGHT,
            recency_window_days: defaults::DEFAULT_RECENCY_WINDOW_DAYS,
            default_limit: defaults::DEFAULT_RECALL_LIMIT,
        }
    }
}
