//! # lore-semantics
//!
//! Turns raw text into [`SemanticInfo`](lore_core::SemanticInfo) and scores
//! the intrinsic importance of new memory content.
//!
//! | Step | Rule |
//! |------|------|
//! | Keywords | lowercase, split on whitespace, drop stopwords and tokens of length ≤ 3 |
//! | Topics | substring match against six fixed topic dictionaries |
//! | Sentiment | 0.5 ± 0.1 per positive/negative indicator, clamped |
//! | Importance | 0.5 + 0.02/keyword + topic and content-type bonuses, clamped |

pub mod analyzer;
pub mod importance;
pub mod keywords;
pub mod sentiment;
pub mod stopwords;
pub mod topics;

pub use analyzer::HeuristicAnalyzer;
pub use importance::ImportanceScorer;
