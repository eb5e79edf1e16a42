use crate::errors::LoreResult;
use crate::models::{CompressedContext, ContextInput};

/// Context compression keyed by input id.
pub trait IContextCompressor: Send + Sync {
    /// Compress the input, returning the cached result for a previously seen id.
    fn compress(&self, input: &ContextInput) -> LoreResult<CompressedContext>;

    /// Drop a cached result so the next request recomputes it.
    fn invalidate(&self, id: &str);
}
