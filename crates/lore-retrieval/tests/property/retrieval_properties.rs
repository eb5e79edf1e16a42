use std::collections::BTreeSet;

use chrono::{Duration, Utc};
use lore_core::config::RetrievalConfig;
use lore_core::memory::{ContentType, DecayFactor, MemoryContent, MemoryEntry, SemanticInfo};
use lore_retrieval::ranking::{scorer, similarity};
use proptest::prelude::*;

fn arb_keywords() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-z]{4,8}", 0..12)
}

proptest! {
    #[test]
    fn jaccard_bounded_and_symmetric(a in arb_keywords(), b in arb_keywords()) {
        let ab = similarity::jaccard(&a, &b);
        let ba = similarity::jaccard(&b, &a);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn jaccard_identity(a in prop::collection::btree_set("[a-z]{4,8}", 1..12)) {
        prop_assert_eq!(similarity::jaccard(&a, &a), 1.0);
    }

    #[test]
    fn score_bounded_by_decay_factor(
        query in arb_keywords(),
        entry_kw in arb_keywords(),
        importance in 0.0f64..=1.0,
        decay in 0.0f64..=1.0,
        days in 0i64..400,
    ) {
        let now = Utc::now();
        let mut entry = MemoryEntry::new(
            MemoryContent::new(ContentType::Note, "x"),
            SemanticInfo { keywords: entry_kw, ..SemanticInfo::default() },
            importance,
            now - Duration::days(days),
        ).unwrap();
        entry.decay_factor = DecayFactor::new(decay);
        let c = scorer::score_entry(0, &entry, &query, now, &RetrievalConfig::default());
        prop_assert!(c.score >= 0.0);
        prop_assert!(c.score <= decay + 1e-9);
    }
}
