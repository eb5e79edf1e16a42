use lore_core::models::ContextInput;
use lore_compression::ContextCompressor;
use proptest::prelude::*;

fn arb_sentence() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("This is important".to_string()),
        Just("We decided to use Rust".to_string()),
        Just("TODO: add docs".to_string()),
        Just("Nothing to see".to_string()),
        "[A-Za-z ]{1,30}",
    ]
}

proptest! {
    #[test]
    fn repeated_id_is_a_cache_hit(sentences in prop::collection::vec(arb_sentence(), 0..10)) {
        let compressor = ContextCompressor::default();
        let input = ContextInput::new("ctx", sentences.join(". "));
        let first = compressor.compress_with_outcome(&input).unwrap();
        let second = compressor.compress_with_outcome(&input).unwrap();
        prop_assert!(!first.cache_hit);
        prop_assert!(second.cache_hit);
        prop_assert_eq!(first.context, second.context);
    }

    #[test]
    fn extraction_respects_caps(sentences in prop::collection::vec(arb_sentence(), 0..20)) {
        let compressor = ContextCompressor::default();
        let text = sentences.join(". ");
        let ctx = compressor.compress_with_outcome(&ContextInput::new("ctx", text.clone())).unwrap().context;
        prop_assert!(ctx.key_points.len() <= 5);
        prop_assert!(ctx.compression_ratio >= 0.0);
        prop_assert_eq!(ctx.original_length, text.chars().count());
        for window in ctx.entities.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
    }
}
