//! Script proxy library.
//!
//! Serves a single endpoint that fetches a fixed remote script and relays it
//! as `text/plain`, or answers `500 Error fetching script` on any failure.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::schema::ScriptProxyConfig;
pub use http::ScriptServer;
pub use lifecycle::Shutdown;
pub use upstream::{FetchError, HttpScriptFetcher, ScriptFetcher, ScriptText};
