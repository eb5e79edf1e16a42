use serde::{Deserialize, Serialize};

use super::defaults;

/// Decay subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Per-day retention base: `decay = retention^days + importance × floor_weight`.
    pub daily_retention: f64,
    /// Importance multiplier added as a floor to the decay factor.
    pub importance_floor_weight: f64,
    /// Entries with a decay risk strictly above this are reported.
    pub risk_report_threshold: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            daily_retention: defaults::DEFAULT_DAILY_RETENTION,
            importance_floor_weight: defaults::DEFAULT_IMPORTANCE_FLOOR_WEIGHT,
            risk_report_threshold: defaults::DEFAULT_RISK_REPORT_THRESHOLD,
        }
    }
}
