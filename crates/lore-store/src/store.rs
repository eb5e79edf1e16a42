//! MemoryStore — per-project entries plus the shared knowledge graph.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use lore_core::config::{LoreConfig, StoreConfig};
use lore_core::errors::{LoreError, LoreResult};
use lore_core::models::{CrossDomainInsight, DecayPrediction, DecayReport, RecallHit};
use lore_core::traits::{IImportanceScorer, ITextAnalyzer};
use lore_core::{MemoryContent, MemoryEntry, ProjectMemory};
use lore_decay::{DecayContext, DecayEngine};
use lore_graph::{KnowledgeGraph, KnowledgeGraphSnapshot};
use lore_retrieval::RelevanceRanker;
use lore_semantics::{HeuristicAnalyzer, ImportanceScorer};

use crate::stats::StoreStats;
use crate::validation::validate_project_id;

/// Entries above this importance are significant regardless of use.
const SIGNIFICANT_IMPORTANCE: f64 = 0.6;
/// Entries recalled more than this many times are significant regardless of importance.
const SIGNIFICANT_ACCESS_COUNT: u64 = 3;

/// Owns all project memory and the knowledge graph.
///
/// The `*_at` variants take an explicit `now`; the plain variants use the
/// wall clock.
pub struct MemoryStore {
    projects: HashMap<String, ProjectMemory>,
    analyzer: Arc<dyn ITextAnalyzer>,
    scorer: Arc<dyn IImportanceScorer>,
    ranker: RelevanceRanker,
    decay: DecayEngine,
    graph: KnowledgeGraph,
    config: StoreConfig,
}

impl MemoryStore {
    /// Store with the heuristic analyzer and importance scorer.
    pub fn new(config: &LoreConfig) -> Self {
        Self::with_analyzer(config, Arc::new(HeuristicAnalyzer))
    }

    /// Store with a custom text analyzer.
    pub fn with_analyzer(config: &LoreConfig, analyzer: Arc<dyn ITextAnalyzer>) -> Self {
        Self {
            projects: HashMap::new(),
            analyzer,
            scorer: Arc::new(ImportanceScorer),
            ranker: RelevanceRanker::new(config.retrieval.clone()),
            decay: DecayEngine::new(config.decay.clone()),
            graph: KnowledgeGraph::new(config.graph.clone()),
            config: config.store.clone(),
        }
    }

    /// Replace the importance scorer.
    pub fn with_scorer(mut self, scorer: Arc<dyn IImportanceScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Store a new observation and return its id.
    pub fn remember(&mut self, project_id: &str, content: MemoryContent) -> LoreResult<String> {
        self.remember_at(project_id, content, Utc::now())
    }

    pub fn remember_at(
        &mut self,
        project_id: &str,
        content: MemoryContent,
        now: DateTime<Utc>,
    ) -> LoreResult<String> {
        validate_project_id(project_id, self.config.strict_project_ids)?;

        let semantics = self.analyzer.analyze(&content.analysis_text());
        let importance = self.scorer.score(&content, &semantics);
        let entry = MemoryEntry::new(content, semantics, importance, now)?;
        let id = entry.id.clone();

        self.graph.ingest(project_id, &id, &entry.semantics.keywords);

        tracing::debug!(
            project_id,
            entry_id = %id,
            content_type = entry.content.content_type.as_str(),
            keywords = entry.semantics.keywords.len(),
            importance,
            "remembered entry"
        );

        self.projects
            .entry(project_id.to_string())
            .or_insert_with(|| ProjectMemory::new(project_id, now))
            .entries
            .push(entry);
        Ok(id)
    }

    /// Rank a project's entries against the query and record access on every hit.
    pub fn recall(
        &mut self,
        project_id: &str,
        query: &str,
        limit: usize,
    ) -> LoreResult<Vec<RecallHit>> {
        self.recall_at(project_id, query, limit, Utc::now())
    }

    /// Hits are scored before access tracking; the returned entries reflect it.
    pub fn recall_at(
        &mut self,
        project_id: &str,
        query: &str,
        limit: usize,
        now: DateTime<Utc>,
    ) -> LoreResult<Vec<RecallHit>> {
        validate_project_id(project_id, self.config.strict_project_ids)?;

        let Some(memory) = self.projects.get_mut(project_id) else {
            return Ok(Vec::new());
        };

        let query_keywords = self.analyzer.keywords(query);
        let ranked = self
            .ranker
            .rank(&memory.entries, &query_keywords, limit, now);

        let hits = ranked
            .into_iter()
            .map(|candidate| {
                let entry = &mut memory.entries[candidate.index];
                entry.record_access(now);
                RecallHit {
                    entry: entry.clone(),
                    relevance: candidate.relevance,
                    recency: candidate.recency,
                    score: candidate.score,
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(project_id, hits = hits.len(), "recall complete");
        Ok(hits)
    }

    /// Entries with importance above 0.6 or more than three accesses,
    /// most important first.
    pub fn significant_memories(&self, project_id: &str) -> LoreResult<Vec<MemoryEntry>> {
        validate_project_id(project_id, self.config.strict_project_ids)?;

        let Some(memory) = self.projects.get(project_id) else {
            return Ok(Vec::new());
        };

        let mut significant: Vec<MemoryEntry> = memory
            .entries
            .iter()
            .filter(|e| {
                e.importance > SIGNIFICANT_IMPORTANCE || e.access_count > SIGNIFICANT_ACCESS_COUNT
            })
            .cloned()
            .collect();
        significant.sort_by(|a, b| {
            b.importance
                .partial_cmp(&a.importance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(significant)
    }

    pub fn predict_decay(&self, project_id: &str) -> LoreResult<DecayPrediction> {
        self.predict_decay_at(project_id, Utc::now())
    }

    /// Forecast stale entries. An unknown project yields an empty prediction.
    pub fn predict_decay_at(
        &self,
        project_id: &str,
        now: DateTime<Utc>,
    ) -> LoreResult<DecayPrediction> {
        validate_project_id(project_id, self.config.strict_project_ids)?;

        let entries = self
            .projects
            .get(project_id)
            .map(|m| m.entries.as_slice())
            .unwrap_or(&[]);
        Ok(self
            .decay
            .predict(project_id, entries, &DecayContext { now }))
    }

    pub fn apply_decay(&mut self, project_id: &str) -> LoreResult<DecayReport> {
        self.apply_decay_at(project_id, Utc::now())
    }

    /// Recompute decay factors for a project. An unknown project processes nothing.
    pub fn apply_decay_at(
        &mut self,
        project_id: &str,
        now: DateTime<Utc>,
    ) -> LoreResult<DecayReport> {
        validate_project_id(project_id, self.config.strict_project_ids)?;

        let ctx = DecayContext { now };
        Ok(match self.projects.get_mut(project_id) {
            Some(memory) => self.decay.apply(project_id, &mut memory.entries, &ctx),
            None => DecayReport {
                project_id: project_id.to_string(),
                ..DecayReport::default()
            },
        })
    }

    /// Keywords shared across the memory of more than one of the given projects.
    /// Unknown and duplicate ids are ignored.
    pub fn find_cross_domain_insights(&self, project_ids: &[String]) -> Vec<CrossDomainInsight> {
        let requested: BTreeSet<&str> = project_ids.iter().map(String::as_str).collect();
        let insights = lore_graph::find_cross_domain_insights(
            requested.into_iter().filter_map(|id| self.projects.get(id)),
        );
        tracing::debug!(
            projects = project_ids.len(),
            insights = insights.len(),
            "mined cross-project insights"
        );
        insights
    }

    /// Neighbour keywords ranked by summed co-occurrence weight.
    pub fn related_keywords(&self, keyword: &str, limit: usize) -> Vec<(String, f64)> {
        self.graph.related_keywords(&keyword.to_lowercase(), limit)
    }

    pub fn knowledge_graph_snapshot(&self) -> KnowledgeGraphSnapshot {
        self.graph.snapshot()
    }

    pub fn graph(&self) -> &KnowledgeGraph {
        &self.graph
    }

    /// Snapshot of a project's memory, `None` if it has none.
    pub fn export_project(&self, project_id: &str) -> Option<ProjectMemory> {
        self.projects.get(project_id).cloned()
    }

    /// Pretty-printed JSON of a project's memory, `None` if it has none.
    pub fn export_project_json(&self, project_id: &str) -> LoreResult<Option<String>> {
        self.projects
            .get(project_id)
            .map(|memory| serde_json::to_string_pretty(memory).map_err(LoreError::from))
            .transpose()
    }

    /// Known project ids, sorted.
    pub fn project_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.projects.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Entry count for a project; 0 when unknown.
    pub fn entry_count(&self, project_id: &str) -> usize {
        self.projects.get(project_id).map_or(0, ProjectMemory::len)
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            project_count: self.projects.len(),
            total_entries: self.projects.values().map(ProjectMemory::len).sum(),
            graph_nodes: self.graph.node_count(),
            graph_edges: self.graph.edge_count(),
            dropped_nodes: self.graph.dropped_nodes(),
            dropped_edges: self.graph.dropped_edges(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(&LoreConfig::default())
    }
}
