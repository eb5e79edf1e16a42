// Single source of truth for all default values.

// --- Store ---
pub const DEFAULT_STRICT_PROJECT_IDS: bool = false;

// --- Retrieval ---
pub const DEFAULT_RELEVANCE_WEIGHT: f64 = 0.5;
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.2;
pub const DEFAULT_IMPORTANCE_WEIGHT: f64 = 0.3;
pub const DEFAULT_RECENCY_WINDOW_DAYS: f64 = 90.0;
pub const DEFAULT_RECALL_LIMIT: usize = 5;

// --- Decay ---
pub const DEFAULT_DAILY_RETENTION: f64 = 0.99;
pub const DEFAULT_IMPORTANCE_FLOOR_WEIGHT: f64 = 0.2;
pub const DEFAULT_RISK_REPORT_THRESHOLD: f64 = 0.5;

// --- Compression ---
pub const DEFAULT_COMPRESSION_CACHE_CAPACITY: u64 = 10_000;
pub const DEFAULT_MAX_KEY_POINTS: usize = 5;
pub const DEFAULT_SUMMARY_KEY_POINTS: usize = 3;
pub const DEFAULT_SUMMARY_DECISIONS: usize = 2;

// --- Graph ---
pub const DEFAULT_GRAPH_MAX_NODES: usize = 50_000;
pub const DEFAULT_GRAPH_MAX_EDGES: usize = 500_000;
pub const DEFAULT_GRAPH_MAX_PAIRS_PER_ENTRY: usize = 1_000;

// --- Significance ---
pub const DEFAULT_CHANGE_HISTORY_CAPACITY: usize = 10_000;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "lore=info";
pub const DEFAULT_JSON_LOGS: bool = false;
