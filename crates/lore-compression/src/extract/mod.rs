//! Pure extraction steps over the input text.

pub mod entities;
pub mod markers;
pub mod sentences;
pub mod summary;

use lore_core::config::CompressionConfig;

/// Everything extracted from one input, before timing and ratio are attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub key_points: Vec<String>,
    pub decisions: Vec<String>,
    pub action_items: Vec<String>,
    pub entities: Vec<String>,
    pub summary: String,
}

/// Run every extraction step.
pub fn extract(text: &str, config: &CompressionConfig) -> Extraction {
    let sentences = sentences::split(text);

    let mut key_points = markers::matching(&sentences, markers::KEY_POINT_MARKERS);
    key_points.truncate(config.max_key_points);
    let decisions = markers::matching(&sentences, markers::DECISION_MARKERS);
    let action_items = markers::matching(&sentences, markers::ACTION_MARKERS);
    let entities = entities::extract(&sentences);
    let summary = summary::build(&key_points, &decisions, config);

    Extraction {
        key_points,
        decisions,
        action_items,
        entities,
        summary,
    }
}
