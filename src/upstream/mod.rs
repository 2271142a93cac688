//! Upstream script retrieval.
//!
//! # Data Flow
//! ```text
//! handler
//!     → ScriptFetcher::fetch (one GET to the configured script URL)
//!     → Result<ScriptText, FetchError>
//!     → http::response maps the result to 200 text/plain or the generic 500
//! ```
//!
//! Nothing is cached: every call performs a fresh fetch.

pub mod client;
pub mod error;

use std::future::Future;

pub use client::HttpScriptFetcher;
pub use error::FetchError;

/// Script payload retrieved for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptText(String);

impl ScriptText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Source of script text.
///
/// The production implementation is [`HttpScriptFetcher`]; handler tests plug
/// in fakes that resolve immediately.
pub trait ScriptFetcher: Send + Sync + 'static {
    /// Fetch the script and decode it as text.
    fn fetch(&self) -> impl Future<Output = Result<ScriptText, FetchError>> + Send;
}
