use serde::{Deserialize, Serialize};

use super::defaults;

/// Change significance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignificanceConfig {
    /// Maximum retained change records; oldest are discarded first.
    pub history_capacity: usize,
}

impl Default for SignificanceConfig {
    fn default() -> Self {
        Self {
            history_capacity: defaults::DEFAULT_CHANGE_HISTORY_CAPACITY,
        }
    }
}
