//! Tracing subscriber setup.
//!
//! Log level comes from `RUST_LOG`; without it the crate logs at `info` and
//! dependencies stay quiet.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "analytics_dashboard=info";

/// Install the global fmt subscriber. Fails if one is already installed.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(())
}
