use std::collections::BTreeSet;

use crate::memory::{SemanticInfo, Topic};

/// Text analysis backend: keywords, topics, and sentiment.
///
/// Scoring and decay only consume the resulting [`SemanticInfo`], so a
/// heuristic implementation can be swapped for an NLP-backed one.
pub trait ITextAnalyzer: Send + Sync {
    /// Keyword set for the text.
    fn keywords(&self, text: &str) -> BTreeSet<String>;

    /// Topics inferred from the text.
    fn topics(&self, text: &str) -> BTreeSet<Topic>;

    /// Sentiment in [0.0, 1.0].
    fn sentiment(&self, text: &str) -> f64;

    /// Full extraction.
    fn analyze(&self, text: &str) -> SemanticInfo {
        SemanticInfo {
            keywords: self.keywords(text),
            topics: self.topics(text),
            sentiment: self.sentiment(text),
        }
    }
}
