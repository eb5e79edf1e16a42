use std::collections::BTreeSet;

use lore_core::constants::MIN_KEYWORD_LEN;

use crate::stopwords::is_stopword;

/// Extract the keyword set of a text.
///
/// No stemming and no punctuation stripping: `"storage."` and `"storage"`
/// are distinct keywords.
pub fn extract(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|t| t.chars().count() > MIN_KEYWORD_LEN && !is_stopword(t))
        .map(str::to_string)
        .collect()
}
