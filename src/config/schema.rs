//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Upstream script location used when nothing else is configured.
pub const DEFAULT_SCRIPT_URL: &str =
    "https://raw.githubusercontent.com/janak0ff/zsh/main/setup_zsh.sh";

/// Root configuration for the script proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ScriptProxyConfig {
    /// Listener configuration (bind address, mount path).
    pub listener: ListenerConfig,

    /// Upstream script source.
    pub upstream: UpstreamConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Path the script handler is mounted on. Any method is accepted.
    pub route_path: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            route_path: "/api/setup".to_string(),
        }
    }
}

/// How a non-2xx upstream response is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamStatusPolicy {
    /// Relay whatever body the upstream sent, with status 200.
    #[default]
    Relay,
    /// Treat a non-2xx upstream status as a fetch failure.
    Reject,
}

/// Upstream script source.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Absolute URL of the script to relay.
    pub script_url: String,

    /// Total deadline for one fetch (connect, headers and body) in seconds.
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Handling of non-2xx upstream statuses.
    pub status_policy: UpstreamStatusPolicy,

    /// User-Agent sent upstream.
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            script_url: DEFAULT_SCRIPT_URL.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 5,
            status_policy: UpstreamStatusPolicy::Relay,
            user_agent: concat!("script-proxy/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
