use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::BASELINE_SENTIMENT;

/// Fixed topic vocabulary inferred from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Architecture,
    Testing,
    Performance,
    Security,
    Api,
    Database,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Self::Architecture,
        Self::Testing,
        Self::Performance,
        Self::Security,
        Self::Api,
        Self::Database,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Architecture => "architecture",
            Self::Testing => "testing",
            Self::Performance => "performance",
            Self::Security => "security",
            Self::Api => "api",
            Self::Database => "database",
        }
    }
}

/// Keywords, topics, and sentiment extracted from a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticInfo {
    /// Lowercased, stopword-filtered tokens longer than three characters.
    pub keywords: BTreeSet<String>,
    pub topics: BTreeSet<Topic>,
    /// Sentiment in [0.0, 1.0], 0.5 is neutral.
    pub sentiment: f64,
}

impl SemanticInfo {
    pub fn has_topic(&self, topic: Topic) -> bool {
        self.topics.contains(&topic)
    }
}

impl Default for SemanticInfo {
    fn default() -> Self {
        Self {
            keywords: BTreeSet::new(),
            topics: BTreeSet::new(),
            sentiment: BASELINE_SENTIMENT,
        }
    }
}
