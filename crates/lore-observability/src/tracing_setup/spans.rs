//! Span definitions per operation: remember, recall, decay, compression, alignment, significance.

/// Create a remember span.
#[macro_export]
macro_rules! remember_span {
    ($project_id:expr) => {
        tracing::info_span!("lore.remember", project_id = %$project_id)
    };
}

/// Create a recall span.
#[macro_export]
macro_rules! recall_span {
    ($project_id:expr, $limit:expr) => {
        tracing::info_span!("lore.recall", project_id = %$project_id, limit = $limit)
    };
}

/// Create a decay span.
#[macro_export]
macro_rules! decay_span {
    ($project_id:expr) => {
        tracing::info_span!("lore.decay", project_id = %$project_id)
    };
}

/// Create a compression span.
#[macro_export]
macro_rules! compression_span {
    ($context_id:expr) => {
        tracing::info_span!("lore.compression", context_id = %$context_id)
    };
}

/// Create an alignment span.
#[macro_export]
macro_rules! alignment_span {
    ($doc_id:expr, $code_id:expr) => {
        tracing::info_span!("lore.alignment", doc_id = %$doc_id, code_id = %$code_id)
    };
}

/// Create a significance span.
#[macro_export]
macro_rules! significance_span {
    ($change_id:expr) => {
        tracing::info_span!("lore.significance", change_id = %$change_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const REMEMBER: &str = "lore.remember";
    pub const RECALL: &str = "lore.recall";
    pub const DECAY: &str = "lore.decay";
    pub const COMPRESSION: &str = "lore.compression";
    pub const ALIGNMENT: &str = "lore.alignment";
    pub const SIGNIFICANCE: &str = "lore.significance";
}
