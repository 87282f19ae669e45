//! Process startup settings read from the environment.

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::{McpError, McpResult};

pub const LOG_LEVEL_ENV: &str = "DAILY_COACH_LOG_LEVEL";
pub const METRICS_ADDR_ENV: &str = "DAILY_COACH_METRICS_ADDR";

/// Per-target overrides appended to every filter to keep rmcp internals quiet.
pub const QUIET_TARGETS: &str = "rmcp=warn,serve_inner=warn";

/// `DAILY_COACH_LOG_LEVEL`, then `RUST_LOG`, then `info`.
pub fn log_level_with<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    get(LOG_LEVEL_ENV)
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| "info".to_string())
}

/// Build the tracing filter, falling back to `info` when `log_level` is invalid.
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("{},{}", log_level, QUIET_TARGETS))
        .unwrap_or_else(|_| EnvFilter::new(format!("info,{}", QUIET_TARGETS)))
}

/// Address for the Prometheus listener, if one is configured.
pub fn metrics_addr_with<F>(mut get: F) -> McpResult<Option<SocketAddr>>
where
    F: FnMut(&str) -> Option<String>,
{
    let Some(raw) = get(METRICS_ADDR_ENV) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| McpError::Config(format!("{METRICS_ADDR_ENV} is not a socket address: {raw}")))
}
