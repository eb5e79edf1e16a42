//! RelevanceRanker — top-k selection over scored entries.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use lore_core::config::RetrievalConfig;
use lore_core::memory::MemoryEntry;

use crate::ranking::scorer::{self, ScoredCandidate};

/// Ranks a project's entries against query keywords.
#[derive(Debug, Clone, Default)]
pub struct RelevanceRanker {
    config: RetrievalConfig,
}

impl RelevanceRanker {
    pub fn new(config: RetrievalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Return at most `limit` candidates, highest score first.
    pub fn rank(
        &self,
        entries: &[MemoryEntry],
        query_keywords: &BTreeSet<String>,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Vec<ScoredCandidate> {
        if limit == 0 || entries.is_empty() {
            return Vec::new();
        }
        let mut scored = scorer::score_all(entries, query_keywords, now, &self.config);
        scored.truncate(limit);
        tracing::debug!(
            candidates = entries.len(),
            returned = scored.len(),
            top_score = scored.first().map(|c| c.score).unwrap_or(0.0),
            "ranked recall candidates"
        );
        scored
    }
}
