pub mod analyzer;
pub mod compressor;
pub mod scorer;

pub use analyzer::ITextAnalyzer;
pub use compressor::IContextCompressor;
pub use scorer::IImportanceScorer;
