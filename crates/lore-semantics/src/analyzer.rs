use std::collections::BTreeSet;

use lore_core::memory::Topic;
use lore_core::traits::ITextAnalyzer;

use crate::{keywords, sentiment, topics};

/// Keyword/substring heuristics. Stateless; cheap to clone and share.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl ITextAnalyzer for HeuristicAnalyzer {
    fn keywords(&self, text: &str) -> BTreeSet<String> {
        keywords::extract(text)
    }

    fn topics(&self, text: &str) -> BTreeSet<Topic> {
        topics::infer(text)
    }

    fn sentiment(&self, text: &str) -> f64 {
        sentiment::score(text)
    }
}
