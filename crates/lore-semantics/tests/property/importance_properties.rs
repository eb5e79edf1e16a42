use lore_core::memory::{ContentType, MemoryContent};
use lore_core::traits::{IImportanceScorer, ITextAnalyzer};
use lore_semantics::{HeuristicAnalyzer, ImportanceScorer};
use proptest::prelude::*;

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
    fn importance_always_in_unit_interval(
        text in "[a-zA-Z ]{0,400}",
        content_type in arb_content_type(),
    ) {
        let content = MemoryContent::new(content_type, text.clone());
        let info = HeuristicAnalyzer.analyze(&text);
        let score = ImportanceScorer.score(&content, &info);
        prop_assert!((0.0..=1.0).contains(&score), "out of bounds: {}", score);
    }

    #[test]
    fn sentiment_always_in_unit_interval(text in ".{0,300}") {
        let s = HeuristicAnalyzer.sentiment(&text);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn keywords_are_long_lowercase_tokens(text in "[a-zA-Z ]{0,300}") {
        for kw in HeuristicAnalyzer.keywords(&text) {
            prop_assert!(kw.chars().count() > 3);
            prop_assert_eq!(kw.to_lowercase(), kw.clone());
        }
    }

    #[test]
    fn extraction_is_deterministic(text in ".{0,200}") {
        prop_assert_eq!(HeuristicAnalyzer.analyze(&text), HeuristicAnalyzer.analyze(&text));
    }
}
