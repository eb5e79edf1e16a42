use lore_core::models::RiskTier;

/// One-line recommendation for an at-risk entry.
pub fn recommend(tier: RiskTier, summary: &str) -> String {
    match tier {
        RiskTier::Archive => format!("Review for relevance or archive: {summary}"),
        RiskTier::Refresh => format!("Refresh by revisiting and confirming: {summary}"),
        RiskTier::Monitor => format!("Monitor for staleness: {summary}"),
    }
}
