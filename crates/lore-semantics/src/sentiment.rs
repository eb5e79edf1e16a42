use lore_core::constants::{BASELINE_SENTIMENT, SENTIMENT_STEP};

const POSITIVE: [&str; 7] = [
    "good",
    "great",
    "excellent",
    "improve",
    "success",
    "better",
    "efficient",
];

const NEGATIVE: [&str; 7] = [
    "bad", "poor", "issue", "problem", "bug", "fail", "slow",
];

/// Score sentiment: baseline 0.5, ±0.1 per indicator word present, clamped to [0, 1].
///
/// Each indicator counts once regardless of how often it occurs.
pub fn score(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let positive = POSITIVE.iter().filter(|w| lowered.contains(*w)).count() as f64;
    let negative = NEGATIVE.iter().filter(|w| lowered.contains(*w)).count() as f64;
    (BASELINE_SENTIMENT + SENTIMENT_STEP * (positive - negative)).clamp(0.0, 1.0)
}
