use serde::{Deserialize, Serialize};

/// Category of a remembered observation. Affects the importance score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Decision,
    Architecture,
    Requirement,
    CodeReference,
    #[default]
    Note,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        Self::Decision,
        Self::Architecture,
        Self::Requirement,
        Self::CodeReference,
        Self::Note,
    ];

    /// Additive importance bonus for this content category.
    pub fn importance_bonus(self) -> f64 {
        match self {
            Self::Decision => 0.2,
            Self::Architecture => 0.2,
            Self::Requirement => 0.15,
            Self::CodeReference => 0.05,
            Self::Note => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decision => "decision",
            Self::Architecture => "architecture",
            Self::Requirement => "requirement",
            Self::CodeReference => "code_reference",
            Self::Note => "note",
        }
    }
}

/// The payload of a memory entry. Immutable once attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryContent {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub summary: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub references: Vec<String>,
}

impl MemoryContent {
    /// Content with only a type and summary.
    pub fn new(content_type: ContentType, summary: impl Into<String>) -> Self {
        Self {
            content_type,
            summary: summary.into(),
            details: String::new(),
            references: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn with_references(mut self, references: Vec<String>) -> Self {
        self.references = references;
        self
    }

    /// Text fed to semantic extraction: summary followed by details.
    pub fn analysis_text(&self) -> String {
        if self.details.is_empty() {
            self.summary.clone()
        } else {
            format!("{} {}", self.summary, self.details)
        }
    }
}
