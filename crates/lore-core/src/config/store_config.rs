use serde::{Deserialize, Serialize};

use super::defaults;

/// Memory store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Reject empty or whitespace-only project identifiers instead of accepting them.
    pub strict_project_ids: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            strict_project_ids: defaults::DEFAULT_STRICT_PROJECT_IDS,
        }
    }
}
