use std::collections::BTreeSet;

use chrono::{Duration, Utc};
use lore_core::config::RetrievalConfig;
use lore_core::memory::{ContentType, DecayFactor, MemoryContent, MemoryEntry};
use lore_core::traits::ITextAnalyzer;
use lore_retrieval::ranking::scorer;
use lore_retrieval::RelevanceRanker;
use lore_semantics::HeuristicAnalyzer;

fn make_entry(text: &str, importance: f64, days_since_access: i64) -> MemoryEntry {
    let now = Utc::now();
    let mut entry = MemoryEntry::new(
        MemoryContent::new(ContentType::Note, text),
        HeuristicAnalyzer.analyze(text),
        importance,
        now - Duration::days(days_since_access),
    )
    .unwrap();
    entry.last_accessed = now - Duration::days(days_since_access);
    entry
}

fn keywords(text: &str) -> BTreeSet<String> {
    HeuristicAnalyzer.keywords(text)
}

#[test]
fn exact_keyword_match_has_relevance_one() {
    let entry = make_entry("postgresql storage", 0.5, 0);
    let c = scorer::score_entry(
        0,
        &entry,
        &keywords("storage postgresql"),
        Utc::now(),
        &RetrievalConfig::default(),
    );
    assert_eq!(c.relevance, 1.0);
}

#[test]
fn combined_score_matches_formula() {
    let now = Utc::now();
    let mut entry = make_entry("postgresql storage decided", 0.6, 45);
    entry.decay_factor = DecayFactor::new(0.8);
    let c = scorer::score_entry(
        0,
        &entry,
        &keywords("postgresql storage"),
        now,
        &RetrievalConfig::default(),
    );
    let relevance = 2.0 / 3.0;
    let recency = 1.0 - 45.0 / 90.0;
    let expected = (0.5 * relevance + 0.2 * recency + 0.3 * 0.6) * 0.8;
    assert!((c.relevance - relevance).abs() < 1e-9);
    assert!((c.recency - recency).abs() < 1e-6);
    assert!((c.score - expected).abs() < 1e-6);
}

#[test]
fn recency_floors_at_zero_past_window() {
    let entry = make_entry("old memory content", 0.5, 200);
    assert_eq!(scorer::recency(&entry, Utc::now(), 90.0), 0.0);
}

#[test]
fn rank_orders_descending_and_respects_limit() {
    let entries = vec![
        make_entry("unrelated gardening notes", 0.5, 0),
        make_entry("postgresql storage engine", 0.5, 0),
        make_entry("postgresql replication", 0.5, 0),
    ];
    let ranker = RelevanceRanker::default();
    let ranked = ranker.rank(&entries, &keywords("postgresql storage"), 2, Utc::now());

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].index, 1);
    assert_eq!(ranked[1].index, 2);
    assert!(ranked[0].score >= ranked[1].score);
}

#[test]
fn rank_with_zero_limit_or_no_entries_is_empty() {
    let ranker = RelevanceRanker::default();
    let entries = vec![make_entry("something here", 0.5, 0)];
    assert!(ranker.rank(&entries, &keywords("something"), 0, Utc::now()).is_empty());
    assert!(ranker.rank(&[], &keywords("something"), 5, Utc::now()).is_empty());
}

#[test]
fn ties_keep_creation_order() {
    let entries = vec![
        make_entry("alpha", 0.5, 0),
        make_entry("beta", 0.5, 0),
        make_entry("gamma", 0.5, 0),
    ];
    let now = Utc::now();
    let mut fixed = entries.clone();
    for e in &mut fixed {
        e.last_accessed = now;
    }
    let ranked = RelevanceRanker::default().rank(&fixed, &BTreeSet::new(), 3, now);
    let order: Vec<usize> = ranked.iter().map(|c| c.index).collect();
    assert_eq!(order, vec![0, 1, 2]);
}
