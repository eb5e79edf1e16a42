//! LoreRuntime — owns all engines behind a single async lock.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use lore_core::errors::LoreResult;
use lore_core::models::{
    AlignmentAnalysis, ChangeRecord, ChangeSignificance, CodeChange, CompressedContext,
    ContextInput, CrossDomainInsight, DecayPrediction, DecayReport, RecallHit,
};
use lore_core::traits::ITextAnalyzer;
use lore_core::{LoreConfig, MemoryContent, MemoryEntry, ProjectMemory};
use lore_graph::KnowledgeGraphSnapshot;
use lore_observability::{
    alignment_span, compression_span, decay_span, recall_span, remember_span,
    significance_span, MetricsSnapshot,
};
use lore_store::StoreStats;

use crate::state::MemoryState;

/// Options for building a runtime.
#[derive(Default)]
pub struct RuntimeOptions {
    /// TOML configuration string. Takes precedence over `config_root`.
    pub config_toml: Option<String>,
    /// Directory holding `lore.toml`; environment overrides apply on top.
    pub config_root: Option<PathBuf>,
    /// Text analyzer replacing the heuristic one.
    pub analyzer: Option<Arc<dyn ITextAnalyzer>>,
}

/// Store statistics plus runtime-level counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeStats {
    pub store: StoreStats,
    pub change_history_len: usize,
    pub compression_cached: u64,
    pub metrics: MetricsSnapshot,
}

/// The central runtime. Share it as `Arc<LoreRuntime>`.
pub struct LoreRuntime {
    state: Mutex<MemoryState>,
    config: LoreConfig,
}

impl LoreRuntime {
    /// Create a runtime from an explicit configuration.
    pub fn new(config: LoreConfig) -> LoreResult<Arc<Self>> {
        Self::build(config, None)
    }

    /// Create a runtime from options.
    pub fn with_options(opts: RuntimeOptions) -> LoreResult<Arc<Self>> {
        let config = match (&opts.config_toml, &opts.config_root) {
            (Some(toml_str), _) => LoreConfig::from_toml(toml_str)?,
            (None, Some(root)) => LoreConfig::load(root)?,
            (None, None) => LoreConfig::default(),
        };
        Self::build(config, opts.analyzer)
    }

    fn build(
        config: LoreConfig,
        analyzer: Option<Arc<dyn ITextAnalyzer>>,
    ) -> LoreResult<Arc<Self>> {
        config.validate()?;
        let state = MemoryState::new(&config, analyzer);
        tracing::info!(
            cache_capacity = config.compression.cache_capacity,
            max_nodes = config.graph.max_nodes,
            max_edges = config.graph.max_edges,
            "lore runtime initialized"
        );
        Ok(Arc::new(Self {
            state: Mutex::new(state),
            config,
        }))
    }

    pub fn config(&self) -> &LoreConfig {
        &self.config
    }

    // ── Memory store ────────────────────────────────────────────────────

    /// Remember new content; returns the entry id.
    pub async fn remember(&self, project_id: &str, content: MemoryContent) -> LoreResult<String> {
        self.remember_at(project_id, content, Utc::now()).await
    }

    pub async fn remember_at(
        &self,
        project_id: &str,
        content: MemoryContent,
        now: DateTime<Utc>,
    ) -> LoreResult<String> {
        let mut state = self.state.lock().await;
        let _span = remember_span!(project_id).entered();
        let id = state.store.remember_at(project_id, content, now)?;
        state.metrics.record_remember();
        Ok(id)
    }

    /// Ranked recall; every returned entry has its access recorded.
    pub async fn recall(
        &self,
        project_id: &str,
        query: &str,
        limit: usize,
    ) -> LoreResult<Vec<RecallHit>> {
        self.recall_at(project_id, query, limit, Utc::now()).await
    }

    pub async fn recall_at(
        &self,
        project_id: &str,
        query: &str,
        limit: usize,
        now: DateTime<Utc>,
    ) -> LoreResult<Vec<RecallHit>> {
        let mut state = self.state.lock().await;
        let _span = recall_span!(project_id, limit).entered();
        let hits = state.store.recall_at(project_id, query, limit, now)?;
        state.metrics.record_recall(hits.len());
        Ok(hits)
    }

    /// Recall with the configured default limit.
    pub async fn recall_default(&self, project_id: &str, query: &str) -> LoreResult<Vec<RecallHit>> {
        self.recall(project_id, query, self.config.retrieval.default_limit)
            .await
    }

    pub async fn significant_memories(&self, project_id: &str) -> LoreResult<Vec<MemoryEntry>> {
        let mut state = self.state.lock().await;
        let significant = state.store.significant_memories(project_id)?;
        state.metrics.record_significance_query();
        Ok(significant)
    }

    pub async fn predict_decay(&self, project_id: &str) -> LoreResult<DecayPrediction> {
        self.predict_decay_at(project_id, Utc::now()).await
    }

    pub async fn predict_decay_at(
        &self,
        project_id: &str,
        now: DateTime<Utc>,
    ) -> LoreResult<DecayPrediction> {
        let mut state = self.state.lock().await;
        let _span = decay_span!(project_id).entered();
        let prediction = state.store.predict_decay_at(project_id, now)?;
        state.metrics.record_decay_prediction();
        Ok(prediction)
    }

    /// One decay pass over a project. Scheduling is the caller's concern.
    pub async fn apply_decay(&self, project_id: &str) -> LoreResult<DecayReport> {
        self.apply_decay_at(project_id, Utc::now()).await
    }

    pub async fn apply_decay_at(
        &self,
        project_id: &str,
        now: DateTime<Utc>,
    ) -> LoreResult<DecayReport> {
        let mut state = self.state.lock().await;
        let _span = decay_span!(project_id).entered();
        let report = state.store.apply_decay_at(project_id, now)?;
        state.metrics.record_decay_pass();
        Ok(report)
    }

    pub async fn find_cross_domain_insights(
        &self,
        project_ids: &[String],
    ) -> Vec<CrossDomainInsight> {
        let mut state = self.state.lock().await;
        let insights = state.store.find_cross_domain_insights(project_ids);
        state.metrics.record_insight_query();
        insights
    }

    pub async fn related_keywords(&self, keyword: &str, limit: usize) -> Vec<(String, f64)> {
        self.state.lock().await.store.related_keywords(keyword, limit)
    }

    pub async fn knowledge_graph_snapshot(&self) -> KnowledgeGraphSnapshot {
        self.state.lock().await.store.knowledge_graph_snapshot()
    }

    pub async fn export_project(&self, project_id: &str) -> Option<ProjectMemory> {
        self.state.lock().await.store.export_project(project_id)
    }

    pub async fn export_project_json(&self, project_id: &str) -> LoreResult<Option<String>> {
        self.state.lock().await.store.export_project_json(project_id)
    }

    // ── Compression ─────────────────────────────────────────────────────

    /// Compress context text; a repeated id returns the cached result.
    pub async fn compress_context(&self, input: &ContextInput) -> LoreResult<CompressedContext> {
        let mut state = self.state.lock().await;
        let _span = compression_span!(input.id).entered();
        let outcome = state.compressor.compress_with_outcome(input)?;
        state.metrics.record_compression(outcome.cache_hit);
        Ok(outcome.context)
    }

    // ── Validation ──────────────────────────────────────────────────────

    pub async fn check_doc_code_alignment(
        &self,
        doc_id: &str,
        doc: &str,
        code_id: &str,
        code: &str,
    ) -> AlignmentAnalysis {
        let mut state = self.state.lock().await;
        let _span = alignment_span!(doc_id, code_id).entered();
        let analysis = lore_validation::check_doc_code_alignment(doc_id, doc, code_id, code);
        state.metrics.record_alignment_check();
        analysis
    }

    /// Score a change and append it to the change history.
    pub async fn assess_change_significance(&self, change: &CodeChange) -> ChangeSignificance {
        let mut state = self.state.lock().await;
        let _span = significance_span!(change.id).entered();
        let significance = state.classifier.assess(change);
        state.metrics.record_change_assessment();
        significance
    }

    /// Recorded change assessments, oldest first.
    pub async fn change_history(&self) -> Vec<ChangeRecord> {
        self.state.lock().await.classifier.history()
    }

    // ── Introspection ───────────────────────────────────────────────────

    pub async fn metrics(&self) -> MetricsSnapshot {
        self.state.lock().await.metrics.snapshot()
    }

    pub async fn stats(&self) -> RuntimeStats {
        let state = self.state.lock().await;
        RuntimeStats {
            store: state.store.stats(),
            change_history_len: state.classifier.history_len(),
            compression_cached: state.compressor.cached_count(),
            metrics: state.metrics.snapshot(),
        }
    }
}
