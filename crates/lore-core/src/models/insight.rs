use serde::{Deserialize, Serialize};

/// A keyword shared by the memory of more than one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossDomainInsight {
    pub keyword: String,
    /// Projects whose memory mentions the keyword, sorted.
    pub projects: Vec<String>,
    /// `|projects with keyword| / |distinct projects with entries|`.
    pub applicability: f64,
    pub description: String,
}
