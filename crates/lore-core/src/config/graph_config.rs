use serde::{Deserialize, Serialize};

use super::defaults;

/// Knowledge graph capacity bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// New keywords beyond this many nodes are dropped.
    pub max_nodes: usize,
    /// New co-occurrence edges beyond this many are dropped.
    pub max_edges: usize,
    /// Co-occurrence edges added for a single entry; further pairs are dropped.
    pub max_pairs_per_entry: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_nodes: defaults::DEFAULT_GRAPH_MAX_NODES,
            max_edges: defaults::DEFAULT_GRAPH_MAX_EDGES,
            max_pairs_per_entry: defaults::DEFAULT_GRAPH_MAX_PAIRS_PER_ENTRY,
        }
    }
}
