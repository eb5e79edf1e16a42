use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use chrono::Utc;
use moka::sync::Cache;

use lore_core::config::CompressionConfig;
use lore_core::errors::{CompressionError, LoreResult};
use lore_core::models::{CompressedContext, ContextInput};
use lore_core::traits::IContextCompressor;

use crate::extract;

/// A compression result and whether it came from the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionOutcome {
    pub context: CompressedContext,
    pub cache_hit: bool,
}

/// Extractive compressor with a bounded cache keyed by input id.
///
/// A cached id returns the stored result unchanged, even if the content
/// passed on the second call differs.
pub struct ContextCompressor {
    cache: Cache<String, CompressedContext>,
    config: CompressionConfig,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ContextCompressor {
    pub fn new(config: CompressionConfig) -> Self {
        let cache = Cache::builder().max_capacity(config.cache_capacity).build();
        Self {
            cache,
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Compress, reporting whether the result was served from cache.
    ///
    /// Slots are only ever written under `input.id`, so `CacheCorrupt` is a
    /// consistency check with no trigger through the public API. A slot whose
    /// stored id differs is invalidated and reported.
    pub fn compress_with_outcome(&self, input: &ContextInput) -> LoreResult<CompressionOutcome> {
        if let Some(cached) = self.cache.get(&input.id) {
            if cached.id != input.id {
                self.cache.invalidate(&input.id);
                tracing::warn!(
                    requested = %input.id,
                    stored = %cached.id,
                    "compression cache slot invalidated"
                );
                return Err(CompressionError::CacheCorrupt {
                    id: input.id.clone(),
                    reason: format!("slot holds result for {:?}", cached.id),
                }
                .into());
            }
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(id = %input.id, "compression cache hit");
            return Ok(CompressionOutcome {
                context: cached,
                cache_hit: true,
            });
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let context = self.compute(input);
        tracing::debug!(
            id = %input.id,
            original_length = context.original_length,
            ratio = context.compression_ratio,
            "compression cache miss"
        );
        self.cache.insert(input.id.clone(), context.clone());
        Ok(CompressionOutcome {
            context,
            cache_hit: false,
        })
    }

    fn compute(&self, input: &ContextInput) -> CompressedContext {
        let started = Instant::now();
        let extraction = extract::extract(&input.content, &self.config);

        let original_length = input.content.chars().count();
        let compression_ratio =
            extraction.summary.chars().count() as f64 / original_length.max(1) as f64;

        CompressedContext {
            id: input.id.clone(),
            summary: extraction.summary,
            key_points: extraction.key_points,
            decisions: extraction.decisions,
            action_items: extraction.action_items,
            entities: extraction.entities,
            original_length,
            compression_ratio,
            processing_time: started.elapsed(),
            compressed_at: Utc::now(),
        }
    }

    /// Whether a result for `id` is currently cached.
    pub fn is_cached(&self, id: &str) -> bool {
        self.cache.contains_key(id)
    }

    /// Approximate number of cached results.
    pub fn cached_count(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn cache_hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl Default for ContextCompressor {
    fn default() -> Self {
        Self::new(CompressionConfig::default())
    }
}

impl IContextCompressor for ContextCompressor {
    fn compress(&self, input: &ContextInput) -> LoreResult<CompressedContext> {
        self.compress_with_outcome(input).map(|outcome| outcome.context)
    }

    fn invalidate(&self, id: &str) {
        self.cache.invalidate(id);
    }
}
