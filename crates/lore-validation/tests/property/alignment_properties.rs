use std::collections::BTreeSet;

use lore_core::models::{CodeChange, DriftLevel};
use lore_validation::alignment::analyze;
use lore_validation::significance::classify;
use proptest::prelude::*;

fn arb_concepts() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-z]{4,8}", 0..10)
}

proptest! {
    #[test]
    fn identical_concept_sets_align_fully(concepts in arb_concepts()) {
        let analysis = analyze("doc", &concepts, "code", &concepts);
        prop_assert_eq!(analysis.alignment_score, 1.0);
        prop_assert_eq!(analysis.drift_level, DriftLevel::None);
    }

    #[test]
    fn alignment_score_is_bounded(doc in arb_concepts(), code in arb_concepts()) {
        let analysis = analyze("doc", &doc, "code", &code);
        prop_assert!((0.0..=1.0).contains(&analysis.alignment_score));
        prop_assert_eq!(
            analysis.matched + analysis.missing_in_doc.len() + analysis.extra_in_doc.len(),
            analysis.total_concepts
        );
    }

    #[test]
    fn significance_score_is_bounded(
        description in "[a-zA-Z ]{0,40}",
        additions in 0u32..10_000,
        deletions in 0u32..10_000,
    ) {
        let change = CodeChange {
            id: "c".to_string(),
            description,
            additions,
            deletions,
            files: Vec::new(),
        };
        let result = classify(&change);
        prop_assert!((0.0..=1.0).contains(&result.significance_score));
        prop_assert_eq!(result.is_significant, result.significance_score > 0.5);
    }
}
