use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata describing a code change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeChange {
    pub id: String,
    pub description: String,
    pub additions: u32,
    pub deletions: u32,
    #[serde(default)]
    pub files: Vec<String>,
}

/// Category assigned to a change, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeCategory {
    Breaking,
    Structural,
    Refactoring,
    Trivial,
    Feature,
}

/// Scored assessment of a code change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeSignificance {
    pub change_id: String,
    pub lines_changed: u64,
    pub is_structural: bool,
    pub affects_public_api: bool,
    pub is_refactoring: bool,
    /// Clamped to [0.0, 1.0].
    pub significance_score: f64,
    pub category: ChangeCategory,
    pub is_significant: bool,
    /// Human-readable contributions to the score.
    pub reasons: Vec<String>,
}

/// Immutable history record appended for every assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub change: CodeChange,
    pub significance: ChangeSignificance,
    pub recorded_at: DateTime<Utc>,
}
