//! # lore-runtime
//!
//! [`LoreRuntime`] owns the memory store, compression cache, and change
//! classifier behind one async mutex. Every public operation takes the lock
//! once and runs to completion, so read-modify-write sequences from
//! concurrent callers never interleave.
//!
//! ```no_run
//! # async fn demo() -> lore_core::LoreResult<()> {
//! use lore_core::{ContentType, LoreConfig, MemoryContent};
//! use lore_runtime::LoreRuntime;
//!
//! let runtime = LoreRuntime::new(LoreConfig::default())?;
//! runtime
//!     .remember("p1", MemoryContent::new(ContentType::Decision, "We decided to use PostgreSQL"))
//!     .await?;
//! let _hits = runtime.recall("p1", "PostgreSQL", 5).await?;
//! # Ok(()) }
//! ```

pub mod runtime;
pub mod state;

pub use runtime::{LoreRuntime, RuntimeOptions, RuntimeStats};
pub use state::MemoryState;
