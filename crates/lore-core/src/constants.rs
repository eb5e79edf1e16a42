/// Lore system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds in a day, used for fractional day arithmetic.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Keywords must be strictly longer than this many characters.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Neutral sentiment before any indicator words are counted.
pub const BASELINE_SENTIMENT: f64 = 0.5;

/// Sentiment shift per matched indicator word.
pub const SENTIMENT_STEP: f64 = 0.1;

/// Placeholder summary when a context block yields no key points or decisions.
pub const EMPTY_SUMMARY_PLACEHOLDER: &str = "No significant content identified";
