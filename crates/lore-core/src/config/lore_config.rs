//! Top-level Lore configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    CompressionConfig, DecayConfig, GraphConfig, ObservabilityConfig, RetrievalConfig,
    SignificanceConfig, StoreConfig,
};
use crate::errors::ConfigError;

/// Name of the project-level config file looked up by [`LoreConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "lore.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`LORE_*`)
/// 2. Project config (`lore.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoreConfig {
    pub store: StoreConfig,
    pub retrieval: RetrievalConfig,
    pub decay: DecayConfig,
    pub compression: CompressionConfig,
    pub graph: GraphConfig,
    pub significance: SignificanceConfig,
    pub observability: ObservabilityConfig,
}

impl LoreConfig {
    /// Load configuration from `root/lore.toml` (if present) plus environment overrides.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(PROJECT_CONFIG_FILE);
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadFailed {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for embedding and tests).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("retrieval.relevance_weight", self.retrieval.relevance_weight),
            ("retrieval.recency_weight", self.retrieval.recency_weight),
            ("retrieval.importance_weight", self.retrieval.importance_weight),
            ("decay.importance_floor_weight", self.decay.importance_floor_weight),
            ("decay.risk_report_threshold", self.decay.risk_report_threshold),
        ];
        for (field, value) in weights {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }
        if !(self.decay.daily_retention > 0.0 && self.decay.daily_retention <= 1.0) {
            return Err(invalid("decay.daily_retention", "must be in (0.0, 1.0]"));
        }
        let window = self.retrieval.recency_window_days;
        if !(window.is_finite() && window > 0.0) {
            return Err(invalid(
                "retrieval.recency_window_days",
                "must be a finite number greater than 0",
            ));
        }
        if self.compression.cache_capacity == 0 {
            return Err(invalid("compression.cache_capacity", "must be greater than 0"));
        }
        if self.graph.max_nodes == 0 || self.graph.max_edges == 0 {
            return Err(invalid("graph", "max_nodes and max_edges must be greater than 0"));
        }
        if self.graph.max_pairs_per_entry == 0 {
            return Err(invalid("graph.max_pairs_per_entry", "must be greater than 0"));
        }
        if self.significance.history_capacity == 0 {
            return Err(invalid(
                "significance.history_capacity",
                "must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Apply environment overrides through a lookup function.
    /// Pattern: `LORE_RECALL_LIMIT`, `LORE_DAILY_RETENTION`, etc.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LORE_STRICT_PROJECT_IDS").and_then(|v| v.parse().ok()) {
            self.store.strict_project_ids = v;
        }
        if let Some(v) = lookup("LORE_RECALL_LIMIT").and_then(|v| v.parse().ok()) {
            self.retrieval.default_limit = v;
        }
        if let Some(v) = lookup("LORE_RECENCY_WINDOW_DAYS").and_then(|v| v.parse().ok()) {
            self.retrieval.recency_window_days = v;
        }
        if let Some(v) = lookup("LORE_DAILY_RETENTION").and_then(|v| v.parse().ok()) {
            self.decay.daily_retention = v;
        }
        if let Some(v) = lookup("LORE_COMPRESSION_CACHE_CAPACITY").and_then(|v| v.parse().ok()) {
            self.compression.cache_capacity = v;
        }
        if let Some(v) = lookup("LORE_GRAPH_MAX_NODES").and_then(|v| v.parse().ok()) {
            self.graph.max_nodes = v;
        }
        if let Some(v) = lookup("LORE_GRAPH_MAX_EDGES").and_then(|v| v.parse().ok()) {
            self.graph.max_edges = v;
        }
        if let Some(v) = lookup("LORE_GRAPH_MAX_PAIRS_PER_ENTRY").and_then(|v| v.parse().ok()) {
            self.graph.max_pairs_per_entry = v;
        }
        if let Some(v) = lookup("LORE_CHANGE_HISTORY_CAPACITY").and_then(|v| v.parse().ok()) {
            self.significance.history_capacity = v;
        }
        if let Some(v) = lookup("LORE_JSON_LOGS").and_then(|v| v.parse().ok()) {
            self.observability.json_logs = v;
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
