//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handler / fetcher produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (fmt layer, filtered by RUST_LOG or config)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! The request ID set by the HTTP layer is attached to every handler log line.

pub mod logging;
pub mod metrics;
