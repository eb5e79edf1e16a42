use chrono::{DateTime, Utc};

use lore_core::config::DecayConfig;
use lore_core::memory::{DecayFactor, MemoryEntry};
use lore_core::models::{DecayPrediction, DecayReport, DecayRiskEntry, RiskTier};

use crate::{formula, recommendations, risk};

/// Evaluation context. `now` is injectable so passes can be replayed.
#[derive(Debug, Clone, Copy)]
pub struct DecayContext {
    pub now: DateTime<Utc>,
}

impl Default for DecayContext {
    fn default() -> Self {
        Self { now: Utc::now() }
    }
}

/// Decay engine: applies decay factors and forecasts staleness.
///
/// Does not schedule itself; an external scheduler calls [`DecayEngine::apply`].
#[derive(Debug, Clone, Default)]
pub struct DecayEngine {
    config: DecayConfig,
}

impl DecayEngine {
    pub fn new(config: DecayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    /// Recompute the decay factor of every entry in place.
    pub fn apply(
        &self,
        project_id: &str,
        entries: &mut [MemoryEntry],
        ctx: &DecayContext,
    ) -> DecayReport {
        let mut sum = 0.0;
        for entry in entries.iter_mut() {
            let value = formula::compute(entry, ctx.now, &self.config);
            entry.decay_factor = DecayFactor::new(value);
            sum += entry.decay_factor.value();
        }

        let processed = entries.len();
        let mean_decay_factor = if processed > 0 {
            sum / processed as f64
        } else {
            0.0
        };
        tracing::info!(project_id, processed, mean_decay_factor, "applied decay");

        DecayReport {
            project_id: project_id.to_string(),
            processed,
            mean_decay_factor,
        }
    }

    /// Flag entries whose risk exceeds the report threshold, highest risk first.
    pub fn predict(
        &self,
        project_id: &str,
        entries: &[MemoryEntry],
        ctx: &DecayContext,
    ) -> DecayPrediction {
        let mut at_risk: Vec<DecayRiskEntry> = entries
            .iter()
            .filter_map(|entry| {
                let breakdown = risk::compute_breakdown(entry, ctx.now);
                if breakdown.total <= self.config.risk_report_threshold {
                    return None;
                }
                let tier = RiskTier::for_risk(breakdown.total);
                Some(DecayRiskEntry {
                    entry_id: entry.id.clone(),
                    summary: entry.content.summary.clone(),
                    content_type: entry.content.content_type,
                    decay_risk: breakdown.total,
                    days_since_access: breakdown.days_since_access,
                    tier,
                    recommendation: recommendations::recommend(tier, &entry.content.summary),
                })
            })
            .collect();

        at_risk.sort_by(|a, b| {
            b.decay_risk
                .partial_cmp(&a.decay_risk)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            project_id,
            evaluated = entries.len(),
            at_risk = at_risk.len(),
            "predicted decay"
        );

        DecayPrediction {
            project_id: project_id.to_string(),
            at_risk,
            evaluated: entries.len(),
            generated_at: ctx.now,
        }
    }
}
