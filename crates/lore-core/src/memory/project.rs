use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entry::MemoryEntry;

/// All memory for one project. Entries are kept in creation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMemory {
    pub project_id: String,
    pub created_at: DateTime<Utc>,
    pub entries: Vec<MemoryEntry>,
}

impl ProjectMemory {
    pub fn new(project_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            project_id: project_id.into(),
            created_at: now,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, entry_id: &str) -> Option<&MemoryEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    pub fn get_mut(&mut self, entry_id: &str) -> Option<&mut MemoryEntry> {
        self.entries.iter_mut().find(|e| e.id == entry_id)
    }
}
