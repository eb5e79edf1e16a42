//! Marker phrases that classify a sentence. Matching is a case-insensitive
//! substring test.

pub const KEY_POINT_MARKERS: &[&str] = &["important", "key", "must", "should", "decision"];
pub const DECISION_MARKERS: &[&str] = &["decided", "will use", "chose", "going with"];
pub const ACTION_MARKERS: &[&str] = &["todo", "action", "need to", "will "];

/// Sentences containing any of the markers, in input order.
pub fn matching(sentences: &[&str], markers: &[&str]) -> Vec<String> {
    sentences
        .iter()
        .filter(|sentence| contains_any(sentence, markers))
        .map(|sentence| sentence.to_string())
        .collect()
}

pub fn contains_any(sentence: &str, markers: &[&str]) -> bool {
    let lowered = sentence.to_lowercase();
    markers.iter().any(|marker| lowered.contains(marker))
}
