/// Separator between sentences.
pub const SENTENCE_SEPARATOR: &str = ". ";

/// Split on `". "`, trimming whitespace and a trailing period. Empty pieces are dropped.
pub fn split(text: &str) -> Vec<&str> {
    text.split(SENTENCE_SEPARATOR)
        .map(|s| s.trim().trim_end_matches('.').trim_end())
        .filter(|s| !s.is_empty())
        .collect()
}
