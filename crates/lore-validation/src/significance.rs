//! Change significance: size and description heuristics, plus a bounded history.

use std::collections::VecDeque;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use lore_core::config::SignificanceConfig;
use lore_core::models::{ChangeCategory, ChangeRecord, ChangeSignificance, CodeChange};

static STRUCTURAL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(class|struct|protocol|interface|module|package|api)").ok());

static PUBLIC_API_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(public|api|endpoint|interface|protocol)").ok());

static REFACTORING_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(refactor|rename|move|extract|cleanup)").ok());

const BASE_SCORE: f64 = 0.3;
const LARGE_CHANGE_LINES: u64 = 100;
const LARGE_CHANGE_BONUS: f64 = 0.2;
const STRUCTURAL_BONUS: f64 = 0.25;
const PUBLIC_API_BONUS: f64 = 0.3;
const REFACTORING_PENALTY: f64 = 0.1;
const TRIVIAL_LINES: u64 = 10;
const SIGNIFICANCE_THRESHOLD: f64 = 0.5;

fn matches(re: &LazyLock<Option<Regex>>, text: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(text))
}

/// Per-signal contributions to a significance score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SignificanceBreakdown {
    pub base: f64,
    pub size: f64,
    pub structural: f64,
    pub public_api: f64,
    pub refactoring: f64,
    /// Clamped sum.
    pub total: f64,
}

/// Scores code changes and keeps the most recent assessments.
pub struct ChangeClassifier {
    history: VecDeque<ChangeRecord>,
    capacity: usize,
}

impl ChangeClassifier {
    pub fn new(config: SignificanceConfig) -> Self {
        Self {
            history: VecDeque::new(),
            capacity: config.history_capacity.max(1),
        }
    }

    /// Assess a change and append it to the history.
    pub fn assess(&mut self, change: &CodeChange) -> ChangeSignificance {
        self.assess_at(change, Utc::now())
    }

    pub fn assess_at(&mut self, change: &CodeChange, now: DateTime<Utc>) -> ChangeSignificance {
        let significance = classify(change);
        tracing::debug!(
            change_id = %change.id,
            score = significance.significance_score,
            category = ?significance.category,
            "assessed change significance"
        );

        if self.history.len() >= self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(ChangeRecord {
            change: change.clone(),
            significance: significance.clone(),
            recorded_at: now,
        });
        significance
    }

    /// Recorded assessments, oldest first.
    pub fn history(&self) -> Vec<ChangeRecord> {
        self.history.iter().cloned().collect()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for ChangeClassifier {
    fn default() -> Self {
        Self::new(SignificanceConfig::default())
    }
}

/// Score contributions for a change without touching any history.
pub fn breakdown(change: &CodeChange) -> SignificanceBreakdown {
    let lines = lines_changed(change);
    let description = change.description.as_str();

    let mut b = SignificanceBreakdown {
        base: BASE_SCORE,
        ..Default::default()
    };
    if lines > LARGE_CHANGE_LINES {
        b.size = LARGE_CHANGE_BONUS;
    }
    if matches(&STRUCTURAL_RE, description) {
        b.structural = STRUCTURAL_BONUS;
    }
    if matches(&PUBLIC_API_RE, description) {
        b.public_api = PUBLIC_API_BONUS;
    }
    if matches(&REFACTORING_RE, description) {
        b.refactoring = -REFACTORING_PENALTY;
    }
    b.total = (b.base + b.size + b.structural + b.public_api + b.refactoring).clamp(0.0, 1.0);
    b
}

/// Pure classification of a change.
pub fn classify(change: &CodeChange) -> ChangeSignificance {
    let lines = lines_changed(change);
    let b = breakdown(change);
    let is_structural = b.structural > 0.0;
    let affects_public_api = b.public_api > 0.0;
    let is_refactoring = b.refactoring < 0.0;

    let category = if affects_public_api {
        ChangeCategory::Breaking
    } else if is_structural {
        ChangeCategory::Structural
    } else if is_refactoring {
        ChangeCategory::Refactoring
    } else if lines < TRIVIAL_LINES {
        ChangeCategory::Trivial
    } else {
        ChangeCategory::Feature
    };

    let mut reasons = Vec::new();
    if b.size > 0.0 {
        reasons.push(format!("{lines} lines changed"));
    }
    if is_structural {
        reasons.push("touches structural declarations".to_string());
    }
    if affects_public_api {
        reasons.push("affects public API".to_string());
    }
    if is_refactoring {
        reasons.push("refactoring".to_string());
    }

    ChangeSignificance {
        change_id: change.id.clone(),
        lines_changed: lines,
        is_structural,
        affects_public_api,
        is_refactoring,
        significance_score: b.total,
        category,
        is_significant: b.total > SIGNIFICANCE_THRESHOLD,
        reasons,
    }
}

fn lines_changed(change: &CodeChange) -> u64 {
    u64::from(change.additions) + u64::from(change.deletions)
}
