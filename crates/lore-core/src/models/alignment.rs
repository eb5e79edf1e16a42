use serde::{Deserialize, Serialize};

/// How far documentation has diverged from code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftLevel {
    None,
    Minor,
    Moderate,
    Severe,
}

impl DriftLevel {
    /// ≥0.9 none, [0.7, 0.9) minor, [0.5, 0.7) moderate, <0.5 severe.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            Self::None
        } else if score >= 0.7 {
            Self::Minor
        } else if score >= 0.5 {
            Self::Moderate
        } else {
            Self::Severe
        }
    }
}

/// Result of comparing documentation concepts against code concepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentAnalysis {
    pub doc_id: String,
    pub code_id: String,
    /// Concepts found in code but not in the documentation, sorted.
    pub missing_in_doc: Vec<String>,
    /// Concepts found in the documentation but not in code, sorted.
    pub extra_in_doc: Vec<String>,
    pub matched: usize,
    pub total_concepts: usize,
    pub alignment_score: f64,
    pub drift_level: DriftLevel,
}
