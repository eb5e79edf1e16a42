use serde::{Deserialize, Serialize};

/// Point-in-time size of the store and its knowledge graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub project_count: usize,
    pub total_entries: usize,
    pub graph_nodes: usize,
    pub graph_edges: usize,
    pub dropped_nodes: u64,
    pub dropped_edges: u64,
}
