//! reqwest-backed script fetcher.

use std::time::{Duration, Instant};

use reqwest::Client;

use crate::config::{UpstreamConfig, UpstreamStatusPolicy};
use crate::observability::metrics;
use crate::upstream::{FetchError, ScriptFetcher, ScriptText};

/// Fetches the configured script URL over HTTP.
///
/// Holds a pooled [`Client`]; cloning the fetcher shares the pool.
#[derive(Debug, Clone)]
pub struct HttpScriptFetcher {
    client: Client,
    script_url: String,
    status_policy: UpstreamStatusPolicy,
}

impl HttpScriptFetcher {
    /// Build a fetcher from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            script_url: config.script_url.clone(),
            status_policy: config.status_policy,
        })
    }

    async fn fetch_inner(&self) -> Result<ScriptText, FetchError> {
        let response = self.client.get(&self.script_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            match self.status_policy {
                UpstreamStatusPolicy::Reject => return Err(FetchError::UpstreamStatus(status)),
                UpstreamStatusPolicy::Relay => {
                    tracing::debug!(status = %status, "Relaying non-success upstream body");
                }
            }
        }

        // Always UTF-8 regardless of any charset label; invalid sequences
        // become U+FFFD.
        let bytes = response.bytes().await?;
        Ok(ScriptText::new(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

impl ScriptFetcher for HttpScriptFetcher {
    async fn fetch(&self) -> Result<ScriptText, FetchError> {
        let start = Instant::now();
        let result = self.fetch_inner().await;
        metrics::record_fetch(result.as_ref().map(|_| ()).map_err(FetchError::kind), start);
        result
    }
}
