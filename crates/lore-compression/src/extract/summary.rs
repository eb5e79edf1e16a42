use lore_core::config::CompressionConfig;
use lore_core::constants::EMPTY_SUMMARY_PLACEHOLDER;

use super::sentences::SENTENCE_SEPARATOR;

/// Leading key points then leading decisions, joined as sentences.
/// Falls back to a fixed placeholder when there is nothing to summarise.
pub fn build(key_points: &[String], decisions: &[String], config: &CompressionConfig) -> String {
    let parts: Vec<&str> = key_points
        .iter()
        .take(config.summary_key_points)
        .chain(decisions.iter().take(config.summary_decisions))
        .map(String::as_str)
        .collect();

    if parts.is_empty() {
        EMPTY_SUMMARY_PLACEHOLDER.to_string()
    } else {
        parts.join(SENTENCE_SEPARATOR)
    }
}
