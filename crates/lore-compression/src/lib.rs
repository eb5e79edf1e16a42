//! # lore-compression
//!
//! Extractive compression of free-form context text.
//! Sentences (split on `". "`) are scanned for marker phrases to pull out key
//! points, decisions, and action items; the summary stitches together the top
//! key points and decisions. Results are cached by input id in a bounded
//! moka cache.

pub mod engine;
pub mod extract;

pub use engine::{CompressionOutcome, ContextCompressor};
