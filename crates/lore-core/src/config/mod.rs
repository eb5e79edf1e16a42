pub mod compression_config;
pub mod decay_config;
pub mod defaults;
pub mod graph_config;
pub mod lore_config;
pub mod observability_config;
pub mod retrieval_config;
pub mod significance_config;
pub mod store_config;

pub use compression_config::CompressionConfig;
pub use decay_config::DecayConfig;
pub use graph_config::GraphConfig;
pub use lore_config::LoreConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use significance_config::SignificanceConfig;
pub use store_config::StoreConfig;
