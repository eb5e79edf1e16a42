use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::memory::ContentType;

/// Recommendation tier for an at-risk entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// Risk above 0.8: review for relevance or archive.
    Archive,
    /// Risk above 0.6: refresh by revisiting.
    Refresh,
    /// Everything else that was reported.
    Monitor,
}

impl RiskTier {
    pub fn for_risk(risk: f64) -> Self {
        if risk > 0.8 {
            Self::Archive
        } else if risk > 0.6 {
            Self::Refresh
        } else {
            Self::Monitor
        }
    }
}

/// An entry flagged as likely to go stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayRiskEntry {
    pub entry_id: String,
    pub summary: String,
    pub content_type: ContentType,
    /// Accumulated risk, clamped to [0.0, 1.0].
    pub decay_risk: f64,
    pub days_since_access: f64,
    pub tier: RiskTier,
    pub recommendation: String,
}

/// Decay forecast for one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayPrediction {
    pub project_id: String,
    /// Reported entries, highest risk first.
    pub at_risk: Vec<DecayRiskEntry>,
    /// Number of entries evaluated.
    pub evaluated: usize,
    pub generated_at: DateTime<Utc>,
}

/// Summary of one decay pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecayReport {
    pub project_id: String,
    pub processed: usize,
    /// Mean decay factor after the pass; 0.0 when nothing was processed.
    pub mean_decay_factor: f64,
}
