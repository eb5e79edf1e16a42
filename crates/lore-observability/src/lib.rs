//! # lore-observability
//!
//! Tracing subscriber setup, span definitions per operation, and
//! monotonically increasing operation counters.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{MetricsCollector, MetricsSnapshot};
pub use tracing_setup::{init_tracing, init_tracing_json, init_tracing_with_filter};
