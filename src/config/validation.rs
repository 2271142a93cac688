//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. Validation is a pure
//! function that reports every problem it finds, not just the first.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ScriptProxyConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("upstream.script_url `{url}` is not a valid absolute URL: {reason}")]
    InvalidScriptUrl { url: String, reason: String },
    #[error("upstream.script_url scheme `{0}` is not http or https")]
    UnsupportedScheme(String),
    #[error("{field} `{value}` is not a socket address")]
    InvalidAddress { field: &'static str, value: String },
    #[error("listener.route_path `{0}` must start with '/'")]
    InvalidRoutePath(String),
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a configuration, returning all errors found.
pub fn validate_config(config: &ScriptProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.upstream.script_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string())),
        Err(e) => errors.push(ValidationError::InvalidScriptUrl {
            url: config.upstream.script_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if !config.listener.route_path.starts_with('/') {
        errors.push(ValidationError::InvalidRoutePath(
            config.listener.route_path.clone(),
        ));
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.timeout_secs"));
    }
    if config.upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.connect_timeout_secs"));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
