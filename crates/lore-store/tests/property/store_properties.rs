use lore_core::{ContentType, MemoryContent};
use lore_store::MemoryStore;
use proptest::prelude::*;

fn arb_word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("cache"),
        Just("database"),
        Just("latency"),
        Just("security"),
        Just("module"),
        Just("endpoint"),
        Just("migration"),
        Just("rollout"),
    ]
    .prop_map(str::to_string)
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_word(), 0..6).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn recall_is_bounded_and_tracks_access(
        texts in prop::collection::vec(arb_text(), 0..12),
        query in arb_text(),
        limit in 0usize..8,
    ) {
        let mut store = MemoryStore::default();
        for text in &texts {
            store.remember("p", MemoryContent::new(ContentType::Note, text.clone())).unwrap();
        }

        let hits = store.recall("p", &query, limit).unwrap();
        prop_assert!(hits.len() <= limit);
        prop_assert!(hits.len() <= texts.len());

        for window in hits.windows(2) {
            prop_assert!(window[0].score >= window[1].score);
        }
        for hit in &hits {
            prop_assert!((0.0..=1.0).contains(&hit.relevance));
            prop_assert!((0.0..=1.0).contains(&hit.score));
            prop_assert_eq!(hit.entry.access_count, 1);
        }

        let total_accesses: u64 = store
            .export_project("p")
            .map(|m| m.entries.iter().map(|e| e.access_count).sum())
            .unwrap_or(0);
        prop_assert_eq!(total_accesses, hits.len() as u64);
    }

    #[test]
    fn each_remember_adds_one_entry(texts in prop::collection::vec(arb_text(), 1..10)) {
        let mut store = MemoryStore::default();
        for (i, text) in texts.iter().enumerate() {
            store.remember("p", MemoryContent::new(ContentType::Decision, text.clone())).unwrap();
            prop_assert_eq!(store.entry_count("p"), i + 1);
        }
        for entry in store.export_project("p").unwrap().entries {
            prop_assert!((0.0..=1.0).contains(&entry.importance));
        }
    }
}
