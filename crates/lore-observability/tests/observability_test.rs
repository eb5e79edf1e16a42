use lore_core::config::ObservabilityConfig;
use lore_observability::tracing_setup::{self, spans::names};
use lore_observability::{
    alignment_span, compression_span, decay_span, recall_span, remember_span, significance_span,
    MetricsCollector,
};

#[test]
fn counters_accumulate() {
    let mut metrics = MetricsCollector::new();
    metrics.record_remember();
    metrics.record_remember();
    metrics.record_recall(3);
    metrics.record_recall(0);
    metrics.record_compression(false);
    metrics.record_compression(true);
    metrics.record_compression(true);
    metrics.record_decay_pass();
    metrics.record_alignment_check();
    metrics.record_change_assessment();

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.remembers, 2);
    assert_eq!(snapshot.recalls, 2);
    assert_eq!(snapshot.recall_hits, 3);
    assert_eq!(snapshot.mean_recall_hits(), 1.5);
    assert_eq!(snapshot.compression_cache_misses, 1);
    assert_eq!(snapshot.compression_cache_hits, 2);
    assert!((snapshot.compression_hit_rate() - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(snapshot.decay_passes, 1);
    assert_eq!(snapshot.alignment_checks, 1);
    assert_eq!(snapshot.change_assessments, 1);
}

#[test]
fn reset_clears_counters() {
    let mut metrics = MetricsCollector::new();
    metrics.record_remember();
    metrics.reset();
    assert_eq!(metrics.snapshot().remembers, 0);
}

#[test]
fn snapshot_serializes() {
    let mut metrics = MetricsCollector::new();
    metrics.record_insight_query();
    let json = serde_json::to_value(metrics.snapshot()).unwrap();
    assert_eq!(json["insight_queries"], 1);
}

#[test]
fn init_is_idempotent() {
    tracing_setup::init_tracing_with_filter(&ObservabilityConfig::default());
    tracing_setup::init_tracing();
    tracing_setup::init_tracing_json();
    assert!(tracing_setup::is_initialized());
}

#[test]
fn span_macros_build_named_spans() {
    tracing_setup::init_tracing();
    let spans = [
        remember_span!("p1"),
        recall_span!("p1", 5usize),
        decay_span!("p1"),
        compression_span!("ctx"),
        alignment_span!("doc", "code"),
        significance_span!("c1"),
    ];
    let expected = [
        names::REMEMBER,
        names::RECALL,
        names::DECAY,
        names::COMPRESSION,
        names::ALIGNMENT,
        names::SIGNIFICANCE,
    ];
    for (span, name) in spans.iter().zip(expected) {
        if let Some(meta) = span.metadata() {
            assert_eq!(meta.name(), name);
        }
    }
}
