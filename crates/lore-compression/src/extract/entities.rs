use std::collections::BTreeSet;

/// Capitalised tokens that do not open a sentence, trailing punctuation
/// trimmed, at least two characters long. Deduplicated and sorted.
pub fn extract(sentences: &[&str]) -> Vec<String> {
    let mut entities = BTreeSet::new();
    for sentence in sentences {
        for token in sentence.split_whitespace().skip(1) {
            let token = token.trim_end_matches(|c: char| c.is_ascii_punctuation());
            let mut chars = token.chars();
            let starts_upper = chars.next().is_some_and(char::is_uppercase);
            if starts_upper && chars.next().is_some() {
                entities.insert(token.to_string());
            }
        }
    }
    entities.into_iter().collect()
}
