use serde::{Deserialize, Serialize};
use std::fmt;

/// Staleness multiplier clamped to [0.0, 1.0]. New entries start at 1.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DecayFactor(f64);

impl DecayFactor {
    /// Create a new DecayFactor, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for DecayFactor {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for DecayFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for DecayFactor {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<DecayFactor> for f64 {
    fn from(d: DecayFactor) -> Self {
        d.0
    }
}
