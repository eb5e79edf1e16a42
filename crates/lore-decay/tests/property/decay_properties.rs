use chrono::{Duration, Utc};
use lore_core::config::DecayConfig;
use lore_core::memory::*;
use lore_decay::{formula, risk};
use proptest::prelude::*;

fn make_entry(
    content_type: ContentType,
    importance: f64,
    access_count: u64,
    days_ago: i64,
) -> MemoryEntry {
    let now = Utc::now();
    let mut entry = MemoryEntry::new(
        MemoryContent::new(content_type, "Test"),
        SemanticInfo::default(),
        importance,
        now - Duration::days(days_ago),
    )
    .unwrap();
    entry.access_count = access_count;
    entry
}

fn arb_content_type() -> impl Strategy<Value = ContentType> {
    prop_oneof![
        Just(ContentType::Decision),
        Just(ContentType::Architecture),
        Just(ContentType::Requirement),
        Just(ContentType::CodeReference),
        Just(ContentType::Note),
    ]
}

proptest! {
    #[test]
    fn decay_monotonically_non_increasing(
        importance in 0.0f64..=1.0,
        day in 0u32..2000,
    ) {
        let config = DecayConfig::default();
        let today = formula::decay_factor(importance, day as f64, &config);
        let tomorrow = formula::decay_factor(importance, day as f64 + 1.0, &config);
        prop_assert!(tomorrow <= today + f64::EPSILON, "{} > {}", tomorrow, today);
    }

    #[test]
    fn decay_bounded(importance in 0.0f64..=1.0, days in 0.0f64..10_000.0) {
        let d = formula::decay_factor(importance, days, &DecayConfig::default());
        prop_assert!((0.0..=1.0).contains(&d));
        prop_assert!(d >= importance * 0.2 - 1e-12);
    }

    #[test]
    fn risk_bounded(
        content_type in arb_content_type(),
        importance in 0.0f64..=1.0,
        access_count in 0u64..10,
        days in 0i64..500,
    ) {
        let entry = make_entry(content_type, importance, access_count, days);
        let r = risk::compute(&entry, Utc::now());
        prop_assert!((0.0..=1.0).contains(&r));
    }
}
