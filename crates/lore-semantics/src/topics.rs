//! Fixed keyword → topic dictionaries.

use std::collections::BTreeSet;

use lore_core::memory::Topic;

/// Indicator substrings per topic.
pub fn indicators(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Architecture => &[
            "architecture",
            "design",
            "pattern",
            "structure",
            "component",
            "module",
            "layer",
        ],
        Topic::Testing => &["test", "spec", "coverage", "mock", "assert", "fixture"],
        Topic::Performance => &[
            "performance",
            "latency",
            "optimiz",
            "cache",
            "throughput",
            "slow",
            "fast",
            "memory",
        ],
        Topic::Security => &[
            "security",
            "auth",
            "encrypt",
            "password",
            "token",
            "permission",
            "vulnerab",
        ],
        Topic::Api => &["api", "endpoint", "request", "response", "rest", "graphql"],
        Topic::Database => &[
            "database",
            "sql",
            "query",
            "schema",
            "migration",
            "table",
            "postgres",
        ],
    }
}

/// Infer topics via substring containment on the lowercased text.
pub fn infer(text: &str) -> BTreeSet<Topic> {
    let lowered = text.to_lowercase();
    Topic::ALL
        .into_iter()
        .filter(|&topic| indicators(topic).iter().any(|kw| lowered.contains(kw)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_substrings() {
        let topics = infer("Switched the REST endpoints to PostgreSQL");
        assert!(topics.contains(&Topic::Api));
        assert!(topics.contains(&Topic::Database));
        assert!(!topics.contains(&Topic::Testing));
    }

    #[test]
    fn empty_text_has_no_topics() {
        assert!(infer("").is_empty());
    }
}
