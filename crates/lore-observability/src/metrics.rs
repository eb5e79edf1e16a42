//! Operation counters.
//!
//! [`MetricsCollector`] is owned by the runtime state and mutated under its
//! lock; [`MetricsSnapshot`] is the serializable read side.

use serde::{Deserialize, Serialize};

/// Point-in-time copy of every counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub remembers: u64,
    pub recalls: u64,
    /// Total entries returned across all recalls.
    pub recall_hits: u64,
    pub significance_queries: u64,
    pub decay_predictions: u64,
    pub decay_passes: u64,
    pub compression_cache_hits: u64,
    pub compression_cache_misses: u64,
    pub alignment_checks: u64,
    pub change_assessments: u64,
    pub insight_queries: u64,
}

impl MetricsSnapshot {
    /// Share of compression requests served from cache; 0 when there were none.
    pub fn compression_hit_rate(&self) -> f64 {
        let total = self.compression_cache_hits + self.compression_cache_misses;
        if total == 0 {
            0.0
        } else {
            self.compression_cache_hits as f64 / total as f64
        }
    }

    /// Mean entries returned per recall; 0 when there were none.
    pub fn mean_recall_hits(&self) -> f64 {
        if self.recalls == 0 {
            0.0
        } else {
            self.recall_hits as f64 / self.recalls as f64
        }
    }
}

/// Monotonic per-operation counters.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    counters: MetricsSnapshot,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_remember(&mut self) {
        self.counters.remembers += 1;
    }

    pub fn record_recall(&mut self, hits: usize) {
        self.counters.recalls += 1;
        self.counters.recall_hits += hits as u64;
    }

    pub fn record_significance_query(&mut self) {
        self.counters.significance_queries += 1;
    }

    pub fn record_decay_prediction(&mut self) {
        self.counters.decay_predictions += 1;
    }

    pub fn record_decay_pass(&mut self) {
        self.counters.decay_passes += 1;
    }

    pub fn record_compression(&mut self, cache_hit: bool) {
        if cache_hit {
            self.counters.compression_cache_hits += 1;
        } else {
            self.counters.compression_cache_misses += 1;
        }
    }

    pub fn record_alignment_check(&mut self) {
        self.counters.alignment_checks += 1;
    }

    pub fn record_change_assessment(&mut self) {
        self.counters.change_assessments += 1;
    }

    pub fn record_insight_query(&mut self) {
        self.counters.insight_queries += 1;
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.counters
    }

    /// Reset all counters (useful for testing or periodic rotation).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
