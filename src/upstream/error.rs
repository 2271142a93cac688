//! Upstream fetch errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure while retrieving the script.
///
/// Every variant is reported to the caller identically; the distinction only
/// shows up in logs and metrics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connect, timeout, body read or decode failure.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx upstream status under the `reject` policy.
    #[error("upstream responded with {0}")]
    UpstreamStatus(StatusCode),
}

impl FetchError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(e) if e.is_timeout() => "timeout",
            FetchError::Transport(e) if e.is_connect() => "connect",
            FetchError::Transport(_) => "transport",
            FetchError::UpstreamStatus(_) => "status",
        }
    }
}
