//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), optional
//!     → loader.rs (parse & deserialize)
//!     → CLI overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → ScriptProxyConfig (validated, immutable)
//! ```
//!
//! Config is frozen once the server starts; there is no reload.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{read_config, ConfigError};
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::ScriptProxyConfig;
pub use schema::UpstreamConfig;
pub use schema::UpstreamStatusPolicy;
pub use validation::{validate_config, ValidationError};
