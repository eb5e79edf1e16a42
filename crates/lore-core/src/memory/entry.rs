use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::MemoryContent;
use super::decay_factor::DecayFactor;
use super::semantics::SemanticInfo;
use crate::constants::SECONDS_PER_DAY;

/// A single remembered observation about a project.
///
/// `id`, `content`, `semantics`, `created_at`, and `importance` are fixed at
/// creation. `last_accessed`, `access_count`, and `decay_factor` are mutated
/// only by the memory store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// UUID v4 identifier.
    pub id: String,
    pub content: MemoryContent,
    pub semantics: SemanticInfo,
    pub created_at: DateTime<Utc>,
    /// Static importance in [0.0, 1.0].
    pub importance: f64,
    pub last_accessed: DateTime<Utc>,
    pub access_count: u64,
    pub decay_factor: DecayFactor,
    /// blake3 hash of the serialized content.
    pub content_hash: String,
}

impl MemoryEntry {
    /// Build a fresh entry: decay factor 1.0, no accesses, last accessed at creation.
    pub fn new(
        content: MemoryContent,
        semantics: SemanticInfo,
        importance: f64,
        now: DateTime<Utc>,
    ) -> crate::errors::LoreResult<Self> {
        let content_hash = Self::compute_content_hash(&content)?;
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            content,
            semantics,
            created_at: now,
            importance: importance.clamp(0.0, 1.0),
            last_accessed: now,
            access_count: 0,
            decay_factor: DecayFactor::default(),
            content_hash,
        })
    }

    /// Compute the blake3 content hash from the serialized content.
    pub fn compute_content_hash(content: &MemoryContent) -> crate::errors::LoreResult<String> {
        let serialized = serde_json::to_string(content)?;
        Ok(blake3::hash(serialized.as_bytes()).to_hex().to_string())
    }

    /// Fractional days since last access, never negative.
    pub fn days_since_access(&self, now: DateTime<Utc>) -> f64 {
        days_between(self.last_accessed, now)
    }

    /// Fractional days since creation, never negative.
    pub fn days_since_created(&self, now: DateTime<Utc>) -> f64 {
        days_between(self.created_at, now)
    }

    /// Record a recall hit.
    pub fn record_access(&mut self, now: DateTime<Utc>) {
        self.last_accessed = now;
        self.access_count += 1;
    }
}

/// Identity equality: two entries are equal if they have the same ID.
impl PartialEq for MemoryEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds().max(0) as f64 / SECONDS_PER_DAY
}
