//! # lore-graph
//!
//! Keyword knowledge graph built incrementally from remembered entries, and
//! cross-project pattern mining over shared keywords.
//!
//! Every keyword of a new entry becomes a node tagged with the owning project.
//! Every pair of keywords co-occurring in the same entry becomes an edge of
//! weight 1.0. Repeated co-occurrences append parallel edges; they are summed
//! only at query time.

pub mod knowledge_graph;
pub mod patterns;

pub use knowledge_graph::{
    EdgeRecord, IngestOutcome, KnowledgeGraph, KnowledgeGraphSnapshot, KnowledgeNode,
};
pub use patterns::find_cross_domain_insights;
