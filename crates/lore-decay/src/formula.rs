use lore_core::config::DecayConfig;
use lore_core::memory::MemoryEntry;

/// Decay factor for an entry given fractional days since last access.
///
/// ```text
/// decay = min(1.0, retention^days + importance × floor_weight)
/// ```
///
/// Non-increasing in `days` for a fixed entry; never above 1.0.
pub fn decay_factor(importance: f64, days_since_access: f64, config: &DecayConfig) -> f64 {
    let temporal = config.daily_retention.powf(days_since_access.max(0.0));
    (temporal + importance * config.importance_floor_weight).min(1.0)
}

/// Decay factor for an entry at `now`.
pub fn compute(entry: &MemoryEntry, now: chrono::DateTime<chrono::Utc>, config: &DecayConfig) -> f64 {
    decay_factor(entry.importance, entry.days_since_access(now), config)
}
