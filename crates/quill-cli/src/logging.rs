use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Pick the log filter: an explicit level wins over `RUST_LOG`, which wins over the default
pub fn build_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(level) => Ok(EnvFilter::try_new(level)?),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the stderr subscriber so logs never mix with answers on stdout
pub fn init(level: Option<&str>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {}", e))
}
