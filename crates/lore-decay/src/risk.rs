use chrono::{DateTime, Utc};

use lore_core::memory::{ContentType, MemoryEntry};

const STALE_DAYS: f64 = 30.0;
const VERY_STALE_DAYS: f64 = 90.0;
const UNDERUSED_MIN_AGE_DAYS: f64 = 14.0;
const UNDERUSED_MAX_ACCESSES: u64 = 2;

const STALE_RISK: f64 = 0.3;
const VERY_STALE_RISK: f64 = 0.3;
const CODE_REFERENCE_RISK: f64 = 0.2;
const UNDERUSED_RISK: f64 = 0.2;

/// Each risk factor individually, for debugging and reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskBreakdown {
    pub days_since_access: f64,
    pub stale: f64,
    pub very_stale: f64,
    pub code_reference: f64,
    pub underused: f64,
    /// Sum of factors, clamped to [0.0, 1.0].
    pub total: f64,
}

/// Compute the decay risk of an entry with a full breakdown.
pub fn compute_breakdown(entry: &MemoryEntry, now: DateTime<Utc>) -> RiskBreakdown {
    let days_since_access = entry.days_since_access(now);

    let stale = if days_since_access > STALE_DAYS {
        STALE_RISK
    } else {
        0.0
    };
    let very_stale = if days_since_access > VERY_STALE_DAYS {
        VERY_STALE_RISK
    } else {
        0.0
    };
    let code_reference = if entry.content.content_type == ContentType::CodeReference {
        CODE_REFERENCE_RISK
    } else {
        0.0
    };
    let underused = if entry.access_count < UNDERUSED_MAX_ACCESSES
        && entry.days_since_created(now) > UNDERUSED_MIN_AGE_DAYS
    {
        UNDERUSED_RISK
    } else {
        0.0
    };

    let total = (stale + very_stale + code_reference + underused).clamp(0.0, 1.0);

    RiskBreakdown {
        days_since_access,
        stale,
        very_stale,
        code_reference,
        underused,
        total,
    }
}

/// Decay risk in [0.0, 1.0].
pub fn compute(entry: &MemoryEntry, now: DateTime<Utc>) -> f64 {
    compute_breakdown(entry, now).total
}
