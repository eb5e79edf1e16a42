use lore_core::memory::{MemoryContent, SemanticInfo, Topic};
use lore_core::traits::IImportanceScorer;

const BASE: f64 = 0.5;
const PER_KEYWORD: f64 = 0.02;
const ARCHITECTURE_TOPIC_BONUS: f64 = 0.15;
const SECURITY_TOPIC_BONUS: f64 = 0.15;

/// Additive importance formula:
///
/// ```text
/// importance = 0.5
///   + 0.02 × |keywords|
///   + 0.15 if topic architecture
///   + 0.15 if topic security
///   + content-type bonus
/// ```
///
/// Clamped to [0.0, 1.0].
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportanceScorer;

impl ImportanceScorer {
    pub fn new() -> Self {
        Self
    }
}

impl IImportanceScorer for ImportanceScorer {
    fn score(&self, content: &MemoryContent, semantics: &SemanticInfo) -> f64 {
        let mut score = BASE + PER_KEYWORD * semantics.keywords.len() as f64;
        if semantics.has_topic(Topic::Architecture) {
            score += ARCHITECTURE_TOPIC_BONUS;
        }
        if semantics.has_topic(Topic::Security) {
            score += SECURITY_TOPIC_BONUS;
        }
        score += content.content_type.importance_bonus();
        score.clamp(0.0, 1.0)
    }
}
