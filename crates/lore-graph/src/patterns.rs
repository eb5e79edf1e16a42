//! Cross-project pattern mining over shared keywords.

use std::collections::{BTreeMap, BTreeSet};

use lore_core::models::CrossDomainInsight;
use lore_core::ProjectMemory;

/// Keywords shared by the memory of more than one of the given projects.
///
/// Applicability is the share of projects (among those given that hold at
/// least one entry) whose memory mentions the keyword. Results are sorted by
/// applicability descending, then keyword.
pub fn find_cross_domain_insights<'a, I>(projects: I) -> Vec<CrossDomainInsight>
where
    I: IntoIterator<Item = &'a ProjectMemory>,
{
    let mut keyword_projects: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    let mut populated: BTreeSet<&str> = BTreeSet::new();

    for memory in projects {
        if memory.is_empty() {
            continue;
        }
        populated.insert(memory.project_id.as_str());
        for entry in &memory.entries {
            for keyword in &entry.semantics.keywords {
                keyword_projects
                    .entry(keyword.as_str())
                    .or_default()
                    .insert(memory.project_id.as_str());
            }
        }
    }

    let total = populated.len();
    let mut insights: Vec<CrossDomainInsight> = keyword_projects
        .into_iter()
        .filter(|(_, owners)| owners.len() > 1)
        .map(|(keyword, owners)| {
            let applicability = owners.len() as f64 / total as f64;
            CrossDomainInsight {
                keyword: keyword.to_string(),
                description: format!(
                    "Pattern '{keyword}' appears across {} projects",
                    owners.len()
                ),
                projects: owners.into_iter().map(str::to_string).collect(),
                applicability,
            }
        })
        .collect();

    insights.sort_by(|a, b| {
        b.applicability
            .partial_cmp(&a.applicability)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.keyword.cmp(&b.keyword))
    });
    insights
}
