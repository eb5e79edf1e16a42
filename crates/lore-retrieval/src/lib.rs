//! # lore-retrieval
//!
//! Scores stored entries against a query for recall.
//!
//! ```text
//! relevance = |Q ∩ E| / |Q ∪ E|               (0 when both empty)
//! recency   = max(0, 1 − daysSinceAccess / 90)
//! score     = (0.5 × relevance + 0.2 × recency + 0.3 × importance) × decayFactor
//! ```

pub mod engine;
pub mod ranking;

pub use engine::RelevanceRanker;
pub use ranking::scorer::ScoredCandidate;
