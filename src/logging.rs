//! Log subscriber setup for hosts that do not install their own.
//!
//! The filter comes from `RUST_LOG` and falls back to
//! [`DEFAULT_LOG_FILTER`](crate::constants::DEFAULT_LOG_FILTER).

use crate::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a formatting subscriber as the global default.
///
/// Fails if a global subscriber is already set.
pub fn try_init() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}

/// Like [`try_init`], but a second call is a no-op.
pub fn init() {
    if try_init().is_err() {
        tracing::debug!("Log subscriber already installed");
    }
}
