//! # lore-decay
//!
//! Two views of staleness:
//!
//! - **Decay factor** — applied on demand by an external scheduler:
//!   `decay = min(1.0, 0.99^daysSinceAccess + importance × 0.2)`.
//! - **Decay risk** — an additive forecast used to flag entries for review.
//!
//! | Risk factor | Contribution |
//! |-------------|--------------|
//! | Not accessed for > 30 days | +0.3 |
//! | Not accessed for > 90 days | +0.3 more |
//! | Code reference | +0.2 |
//! | Fewer than 2 accesses and older than 14 days | +0.2 |

pub mod engine;
pub mod formula;
pub mod recommendations;
pub mod risk;

pub use engine::{DecayContext, DecayEngine};
pub use risk::RiskBreakdown;
