//! petgraph::StableGraph wrapper with keyword nodes and co-occurrence edges.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use lore_core::config::GraphConfig;

/// Weight given to every co-occurrence edge.
pub const COOCCURRENCE_WEIGHT: f64 = 1.0;

/// A keyword node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeNode {
    pub keyword: String,
    /// Projects whose entries mention this keyword.
    pub projects: BTreeSet<String>,
    /// Number of entries that mentioned this keyword.
    pub mentions: u64,
}

/// Weight on a co-occurrence edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CooccurrenceEdge {
    pub weight: f64,
    pub project_id: String,
    pub entry_id: String,
}

/// Plain-data edge for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Plain-data view of the whole graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeGraphSnapshot {
    pub nodes: BTreeMap<String, KnowledgeNode>,
    /// In insertion order, duplicates preserved.
    pub edges: Vec<EdgeRecord>,
}

/// What a single ingest added or dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOutcome {
    pub nodes_added: usize,
    pub edges_added: usize,
    pub nodes_dropped: usize,
    pub edges_dropped: usize,
}

/// The underlying directed graph type.
pub type KeywordStableGraph = StableGraph<KnowledgeNode, CooccurrenceEdge, Directed>;

/// Knowledge graph with keyword lookup and capacity bounds.
///
/// Nodes and edges are never removed. When a bound is reached, new nodes or
/// edges are dropped and counted.
pub struct KnowledgeGraph {
    graph: KeywordStableGraph,
    node_index: HashMap<String, NodeIndex>,
    config: GraphConfig,
    dropped_nodes: u64,
    dropped_edges: u64,
}

impl KnowledgeGraph {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
            config,
            dropped_nodes: 0,
            dropped_edges: 0,
        }
    }

    /// Add an entry's keywords: tag nodes with the project, then append one
    /// edge per co-occurring pair (in sorted keyword order).
    ///
    /// At most `max_pairs_per_entry` edges are added per entry. Once that
    /// bound or `max_edges` is reached, the remaining pairs are counted as
    /// dropped without being visited.
    pub fn ingest(
        &mut self,
        project_id: &str,
        entry_id: &str,
        keywords: &BTreeSet<String>,
    ) -> IngestOutcome {
        let mut outcome = IngestOutcome::default();
        let mut indices: Vec<Option<NodeIndex>> = Vec::with_capacity(keywords.len());

        for keyword in keywords {
            let idx = self.ensure_node(keyword, project_id, &mut outcome);
            indices.push(idx);
        }

        let n = indices.len();
        let total_pairs = n * n.saturating_sub(1) / 2;
        let mut visited = 0usize;

        'pairs: for i in 0..n {
            for j in (i + 1)..n {
                let (Some(a), Some(b)) = (indices[i], indices[j]) else {
                    visited += 1;
                    outcome.edges_dropped += 1;
                    continue;
                };
                if self.graph.edge_count() >= self.config.max_edges
                    || outcome.edges_added >= self.config.max_pairs_per_entry
                {
                    outcome.edges_dropped += total_pairs - visited;
                    break 'pairs;
                }
                self.graph.add_edge(
                    a,
                    b,
                    CooccurrenceEdge {
                        weight: COOCCURRENCE_WEIGHT,
                        project_id: project_id.to_string(),
                        entry_id: entry_id.to_string(),
                    },
                );
                visited += 1;
                outcome.edges_added += 1;
            }
        }

        self.dropped_nodes += outcome.nodes_dropped as u64;
        self.dropped_edges += outcome.edges_dropped as u64;
        if outcome.nodes_dropped > 0 || outcome.edges_dropped > 0 {
            tracing::warn!(
                project_id,
                entry_id,
                nodes_dropped = outcome.nodes_dropped,
                edges_dropped = outcome.edges_dropped,
                max_nodes = self.config.max_nodes,
                max_edges = self.config.max_edges,
                max_pairs_per_entry = self.config.max_pairs_per_entry,
                "knowledge graph at capacity"
            );
        }
        outcome
    }

    fn ensure_node(
        &mut self,
        keyword: &str,
        project_id: &str,
        outcome: &mut IngestOutcome,
    ) -> Option<NodeIndex> {
        if let Some(&idx) = self.node_index.get(keyword) {
            let node = &mut self.graph[idx];
            node.projects.insert(project_id.to_string());
            node.mentions += 1;
            return Some(idx);
        }
        if self.graph.node_count() >= self.config.max_nodes {
            outcome.nodes_dropped += 1;
            return None;
        }
        let node = KnowledgeNode {
            keyword: keyword.to_string(),
            projects: BTreeSet::from([project_id.to_string()]),
            mentions: 1,
        };
        let idx = self.graph.add_node(node);
        self.node_index.insert(keyword.to_string(), idx);
        outcome.nodes_added += 1;
        Some(idx)
    }

    /// Look up a keyword node.
    pub fn node(&self, keyword: &str) -> Option<&KnowledgeNode> {
        self.node_index.get(keyword).map(|&idx| &self.graph[idx])
    }

    /// Neighbour keywords ranked by summed co-occurrence weight, descending,
    /// ties broken alphabetically.
    pub fn related_keywords(&self, keyword: &str, limit: usize) -> Vec<(String, f64)> {
        let Some(&idx) = self.node_index.get(keyword) else {
            return Vec::new();
        };

        let mut weights: HashMap<NodeIndex, f64> = HashMap::new();
        for direction in [Direction::Outgoing, Direction::Incoming] {
            for edge in self.graph.edges_directed(idx, direction) {
                let other = if direction == Direction::Outgoing {
                    edge.target()
                } else {
                    edge.source()
                };
                *weights.entry(other).or_insert(0.0) += edge.weight().weight;
            }
        }

        let mut related: Vec<(String, f64)> = weights
            .into_iter()
            .map(|(other, w)| (self.graph[other].keyword.clone(), w))
            .collect();
        related.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        related.truncate(limit);
        related
    }

    /// Export nodes and edges as plain data.
    pub fn snapshot(&self) -> KnowledgeGraphSnapshot {
        let nodes = self
            .graph
            .node_weights()
            .map(|n| (n.keyword.clone(), n.clone()))
            .collect();
        let edges = self
            .graph
            .edge_references()
            .map(|e| EdgeRecord {
                from: self.graph[e.source()].keyword.clone(),
                to: self.graph[e.target()].keyword.clone(),
                weight: e.weight().weight,
            })
            .collect();
        KnowledgeGraphSnapshot { nodes, edges }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn dropped_nodes(&self) -> u64 {
        self.dropped_nodes
    }

    pub fn dropped_edges(&self) -> u64 {
        self.dropped_edges
    }
}

impl Default for KnowledgeGraph {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}
