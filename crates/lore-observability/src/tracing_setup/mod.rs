//! Tracing setup: env-filtered fmt subscriber, installed at most once per process.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use lore_core::config::ObservabilityConfig;

/// Environment variable read for the filter directive.
pub const LOG_ENV_VAR: &str = "LORE_LOG";

static INIT: Once = Once::new();

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Human-readable output filtered by `LORE_LOG` (default `lore=info`).
///
/// Later calls, and calls after another global subscriber was installed, are no-ops.
pub fn init_tracing() {
    let fallback = ObservabilityConfig::default().log_filter;
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter(&fallback))
            .with_target(true)
            .try_init();
    });
}

/// JSON-lines output filtered by `LORE_LOG` (default `lore=info`).
pub fn init_tracing_json() {
    let fallback = ObservabilityConfig::default().log_filter;
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter(&fallback))
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init();
    });
}

/// Install with an explicit config: `LORE_LOG` still wins over `log_filter`.
pub fn init_tracing_with_filter(config: &ObservabilityConfig) {
    let filter = env_filter(&config.log_filter);
    let json = config.json_logs;
    INIT.call_once(|| {
        let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
        let _ = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}

/// Whether one of the init functions has run.
pub fn is_initialized() -> bool {
    INIT.is_completed()
}
