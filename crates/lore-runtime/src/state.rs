use std::sync::Arc;

use lore_compression::ContextCompressor;
use lore_core::traits::ITextAnalyzer;
use lore_core::LoreConfig;
use lore_observability::MetricsCollector;
use lore_store::MemoryStore;
use lore_validation::ChangeClassifier;

/// Everything the runtime serializes access to.
pub struct MemoryState {
    pub store: MemoryStore,
    pub compressor: ContextCompressor,
    pub classifier: ChangeClassifier,
    pub metrics: MetricsCollector,
}

impl MemoryState {
    pub fn new(config: &LoreConfig, analyzer: Option<Arc<dyn ITextAnalyzer>>) -> Self {
        let store = match analyzer {
            Some(analyzer) => MemoryStore::with_analyzer(config, analyzer),
            None => MemoryStore::new(config),
        };
        Self {
            store,
            compressor: ContextCompressor::new(config.compression.clone()),
            classifier: ChangeClassifier::new(config.significance.clone()),
            metrics: MetricsCollector::new(),
        }
    }
}
