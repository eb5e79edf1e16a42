//! Three-factor recall scorer: keyword relevance, recency, importance,
//! all scaled by the entry's decay factor.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use lore_core::config::RetrievalConfig;
use lore_core::memory::MemoryEntry;

use super::similarity::jaccard;

/// A stored entry scored against a query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// Position of the entry in the project's entry list.
    pub index: usize,
    pub relevance: f64,
    pub recency: f64,
    pub score: f64,
}

/// Linear recency: 1.0 when just accessed, 0.0 at or beyond the window.
pub fn recency(entry: &MemoryEntry, now: DateTime<Utc>, window_days: f64) -> f64 {
    (1.0 - entry.days_since_access(now) / window_days).max(0.0)
}

/// Score a single entry.
pub fn score_entry(
    index: usize,
    entry: &MemoryEntry,
    query_keywords: &BTreeSet<String>,
    now: DateTime<Utc>,
    config: &RetrievalConfig,
) -> ScoredCandidate {
    let relevance = jaccard(query_keywords, &entry.semantics.keywords);
    let recency = recency(entry, now, config.recency_window_days);
    let score = (config.relevance_weight * relevance
        + config.recency_weight * recency
        + config.importance_weight * entry.importance)
        * entry.decay_factor.value();

    ScoredCandidate {
        index,
        relevance,
        recency,
        score,
    }
}

/// Score every entry and sort by score descending.
/// Ties keep creation order.
pub fn score_all(
    entries: &[MemoryEntry],
    query_keywords: &BTreeSet<String>,
    now: DateTime<Utc>,
    config: &RetrievalConfig,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| score_entry(i, e, query_keywords, now, config))
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}
