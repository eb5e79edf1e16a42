//! Common English function words excluded from keyword sets.

use std::collections::HashSet;
use std::sync::LazyLock;

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her",
        "was", "one", "our", "out", "has", "him", "his", "how", "its", "who", "did", "yes",
        "this", "that", "with", "from", "have", "will", "would", "there", "their", "what",
        "when", "which", "about", "into", "been", "were", "they", "them", "then", "than",
        "also", "just", "some", "such", "only", "other", "more", "most", "very", "over",
        "after", "before", "because", "being", "could", "should", "each", "does", "here",
        "where", "while", "your", "these", "those", "through", "again", "both", "same",
        "between", "during", "having",
    ]
    .into_iter()
    .collect()
});

/// Whether a lowercased token is a stopword.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}
