use std::sync::Arc;

use chrono::{Duration, Utc};
use lore_core::errors::{LoreError, StoreError};
use lore_core::models::{ChangeCategory, CodeChange, ContextInput, DriftLevel, RiskTier};
use lore_core::{ContentType, LoreConfig, MemoryContent};
use lore_runtime::{LoreRuntime, RuntimeOptions};

fn runtime() -> Arc<LoreRuntime> {
    LoreRuntime::new(LoreConfig::default()).unwrap()
}

#[tokio::test]
async fn recall_unknown_project_is_empty() {
    let rt = runtime();
    assert!(rt.recall("unknown-project", "anything", 5).await.unwrap().is_empty());
    assert!(rt.significant_memories("unknown-project").await.unwrap().is_empty());
    assert!(rt.predict_decay("unknown-project").await.unwrap().at_risk.is_empty());
}

#[tokio::test]
async fn remember_creates_fresh_entry() {
    let rt = runtime();
    let id = rt
        .remember("p1", MemoryContent::new(ContentType::Note, "initial thoughts"))
        .await
        .unwrap();

    let memory = rt.export_project("p1").await.unwrap();
    assert_eq!(memory.entries.len(), 1);
    let entry = memory.get(&id).unwrap();
    assert_eq!(entry.decay_factor.value(), 1.0);
    assert_eq!(entry.access_count, 0);
}

#[tokio::test]
async fn decision_recalled_first() {
    let rt = runtime();
    rt.remember("p1", MemoryContent::new(ContentType::Note, "Standup notes for Monday"))
        .await
        .unwrap();
    let id = rt
        .remember(
            "p1",
            MemoryContent::new(ContentType::Decision, "We decided to use PostgreSQL for storage"),
        )
        .await
        .unwrap();

    let hits = rt.recall("p1", "PostgreSQL storage", 5).await.unwrap();
    assert_eq!(hits[0].entry.id, id);
    assert!(hits[0].relevance > 0.0);
    assert_eq!(hits[0].entry.access_count, 1);
}

#[tokio::test]
async fn stale_code_reference_is_archived() {
    let rt = runtime();
    let now = Utc::now();
    rt.remember_at(
        "p1",
        MemoryContent::new(ContentType::CodeReference, "src/old_module.rs"),
        now - Duration::days(100),
    )
    .await
    .unwrap();

    let prediction = rt.predict_decay_at("p1", now).await.unwrap();
    assert_eq!(prediction.at_risk.len(), 1);
    assert_eq!(prediction.at_risk[0].decay_risk, 1.0);
    assert_eq!(prediction.at_risk[0].tier, RiskTier::Archive);
}

#[tokio::test]
async fn undocumented_concept_is_moderate_drift() {
    let rt = runtime();
    let analysis = rt
        .check_doc_code_alignment(
            "doc",
            "userauthentication",
            "code",
            "userauthentication tokenrefresh",
        )
        .await;
    assert_eq!(analysis.missing_in_doc, vec!["tokenrefresh"]);
    assert_eq!(analysis.alignment_score, 0.5);
    assert_eq!(analysis.drift_level, DriftLevel::Moderate);
}

#[tokio::test]
async fn public_api_change_is_breaking() {
    let rt = runtime();
    let change = CodeChange {
        id: "c1".to_string(),
        description: "public API endpoint change".to_string(),
        additions: 150,
        deletions: 20,
        files: vec!["src/api.rs".to_string()],
    };
    let result = rt.assess_change_significance(&change).await;
    assert_eq!(result.category, ChangeCategory::Breaking);
    assert!(result.is_significant);
    assert_eq!(result.significance_score, 1.0);

    let history = rt.change_history().await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].change, change);
}

#[tokio::test]
async fn compression_is_idempotent_per_id() {
    let rt = runtime();
    let input = ContextInput::new(
        "ctx",
        "The key constraint is latency. We decided to use Redis. We need to add metrics.",
    );
    let first = rt.compress_context(&input).await.unwrap();
    let second = rt.compress_context(&input).await.unwrap();
    assert_eq!(first, second);

    let metrics = rt.metrics().await;
    assert_eq!(metrics.compression_cache_misses, 1);
    assert_eq!(metrics.compression_cache_hits, 1);
}

#[tokio::test]
async fn apply_decay_reports_and_counts() {
    let rt = runtime();
    let now = Utc::now();
    rt.remember_at(
        "p1",
        MemoryContent::new(ContentType::Note, "quick note"),
        now - Duration::days(30),
    )
    .await
    .unwrap();

    let report = rt.apply_decay_at("p1", now).await.unwrap();
    assert_eq!(report.processed, 1);
    assert!(report.mean_decay_factor < 1.0);
    assert_eq!(rt.metrics().await.decay_passes, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_remembers_are_all_applied() {
    let rt = runtime();
    let mut handles = Vec::new();
    for i in 0..64 {
        let rt = Arc::clone(&rt);
        handles.push(tokio::spawn(async move {
            let project = if i % 2 == 0 { "even" } else { "odd" };
            rt.remember(
                project,
                MemoryContent::new(ContentType::Note, format!("shared concept item{i}")),
            )
            .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stats = rt.stats().await;
    assert_eq!(stats.store.total_entries, 64);
    assert_eq!(stats.store.project_count, 2);
    assert_eq!(stats.metrics.remembers, 64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_recalls_never_lose_access_updates() {
    let rt = runtime();
    let id = rt
        .remember("p1", MemoryContent::new(ContentType::Note, "cache invalidation"))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..32 {
        let rt = Arc::clone(&rt);
        handles.push(tokio::spawn(async move {
            rt.recall("p1", "cache invalidation", 1).await
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().len(), 1);
    }

    let memory = rt.export_project("p1").await.unwrap();
    assert_eq!(memory.get(&id).unwrap().access_count, 32);
}

#[tokio::test]
async fn cross_domain_insights_and_graph_queries() {
    let rt = runtime();
    rt.remember("web", MemoryContent::new(ContentType::Note, "graphql gateway caching"))
        .await
        .unwrap();
    rt.remember("mobile", MemoryContent::new(ContentType::Note, "graphql client caching"))
        .await
        .unwrap();

    let insights = rt
        .find_cross_domain_insights(&["web".to_string(), "mobile".to_string()])
        .await;
    let keywords: Vec<&str> = insights.iter().map(|i| i.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["caching", "graphql"]);

    let related = rt.related_keywords("graphql", 5).await;
    assert_eq!(related[0], ("caching".to_string(), 2.0));

    let snapshot = rt.knowledge_graph_snapshot().await;
    assert_eq!(snapshot.nodes.len(), 4);
    assert_eq!(snapshot.edges.len(), 6);
}

#[tokio::test]
async fn export_json_and_stats() {
    let rt = runtime();
    rt.remember("p1", MemoryContent::new(ContentType::Requirement, "Audit logging required"))
        .await
        .unwrap();
    let json = rt.export_project_json("p1").await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["project_id"], "p1");
    assert_eq!(value["entries"][0]["content"]["type"], "requirement");

    let stats = rt.stats().await;
    assert_eq!(stats.store.total_entries, 1);
    assert_eq!(stats.change_history_len, 0);
}

#[tokio::test]
async fn options_from_toml_enable_strict_ids() {
    let rt = LoreRuntime::with_options(RuntimeOptions {
        config_toml: Some("[store]\nstrict_project_ids = true\n".to_string()),
        ..Default::default()
    })
    .unwrap();
    assert!(rt.config().store.strict_project_ids);

    let err = rt
        .remember("", MemoryContent::new(ContentType::Note, "text"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        LoreError::Store(StoreError::InvalidProjectIdentifier { .. })
    ));
}

#[tokio::test]
async fn options_from_config_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("lore.toml"),
        "[significance]\nhistory_capacity = 1\n",
    )
    .unwrap();
    let rt = LoreRuntime::with_options(RuntimeOptions {
        config_root: Some(dir.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();

    for id in ["a", "b"] {
        let change = CodeChange {
            id: id.to_string(),
            description: "fix typo".to_string(),
            additions: 1,
            deletions: 0,
            files: Vec::new(),
        };
        rt.assess_change_significance(&change).await;
    }
    let history = rt.change_history().await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].change.id, "b");
}

#[tokio::test]
async fn invalid_config_is_rejected() {
    let mut config = LoreConfig::default();
    config.decay.daily_retention = 1.5;
    assert!(matches!(LoreRuntime::new(config), Err(LoreError::Config(_))));
}

#[tokio::test]
async fn recall_default_uses_configured_limit() {
    let mut config = LoreConfig::default();
    config.retrieval.default_limit = 2;
    let rt = LoreRuntime::new(config).unwrap();
    for i in 0..4 {
        rt.remember("p1", MemoryContent::new(ContentType::Note, format!("tracing span{i}")))
            .await
            .unwrap();
    }
    assert_eq!(rt.recall_default("p1", "tracing").await.unwrap().len(), 2);
}
