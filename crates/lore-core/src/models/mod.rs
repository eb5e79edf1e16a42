pub mod alignment;
pub mod change;
pub mod compressed_context;
pub mod decay_prediction;
pub mod insight;
pub mod recall_hit;

pub use alignment::{AlignmentAnalysis, DriftLevel};
pub use change::{ChangeCategory, ChangeRecord, ChangeSignificance, CodeChange};
pub use compressed_context::{CompressedContext, ContextInput};
pub use decay_prediction::{DecayPrediction, DecayReport, DecayRiskEntry, RiskTier};
pub use insight::CrossDomainInsight;
pub use recall_hit::RecallHit;
