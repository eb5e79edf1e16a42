use chrono::{Duration, TimeZone, Utc};
use lore_core::config::LoreConfig;
use lore_core::memory::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn decay_factor_is_clamped(value in -1.0e6f64..1.0e6) {
        let factor = DecayFactor::new(value);
        prop_assert!((0.0..=1.0).contains(&factor.value()));
        if (0.0..=1.0).contains(&value) {
            prop_assert_eq!(factor.value(), value);
        }
    }

    #[test]
    fn content_type_bonus_is_bounded(idx in 0usize..ContentType::ALL.len()) {
        let bonus = ContentType::ALL[idx].importance_bonus();
        prop_assert!((0.0..=0.2).contains(&bonus));
    }

    #[test]
    fn new_entry_importance_is_clamped(importance in -10.0f64..10.0) {
        let now = Utc::now();
        let entry = MemoryEntry::new(
            MemoryContent::new(ContentType::Note, "text"),
            SemanticInfo::default(),
            importance,
            now,
        )
        .unwrap();
        prop_assert!((0.0..=1.0).contains(&entry.importance));
        prop_assert_eq!(entry.decay_factor.value(), 1.0);
    }

    #[test]
    fn day_helpers_are_never_negative(offset_secs in -10_000_000i64..10_000_000) {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let entry = MemoryEntry::new(
            MemoryContent::new(ContentType::Decision, "text"),
            SemanticInfo::default(),
            0.5,
            created,
        )
        .unwrap();
        let now = created + Duration::seconds(offset_secs);
        prop_assert!(entry.days_since_access(now) >= 0.0);
        prop_assert!(entry.days_since_created(now) >= 0.0);
    }

    #[test]
    fn validate_rejects_any_non_positive_window(window in prop_oneof![
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        -1.0e9f64..=0.0,
    ]) {
        let mut config = LoreConfig::default();
        config.retrieval.recency_window_days = window;
        prop_assert!(config.validate().is_err());
    }
}
