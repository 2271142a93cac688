//! Metrics collection and exposition.
//!
//! # Metrics
//! - `script_proxy_requests_total` (counter): handled requests by outcome, status
//! - `script_proxy_fetch_duration_seconds` (histogram): upstream fetch latency
//! - `script_proxy_fetch_errors_total` (counter): failed fetches by error kind
//!
//! Recording is a no-op until [`init_metrics`] installs the Prometheus
//! recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);

    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a handled inbound request.
pub fn record_request(status: u16) {
    let outcome = if status == 500 { "error" } else { "ok" };
    ::metrics::counter!(
        "script_proxy_requests_total",
        "outcome" => outcome,
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record one upstream fetch; `Err` carries the error kind label.
pub fn record_fetch(outcome: Result<(), &'static str>, start: Instant) {
    let elapsed = start.elapsed().as_secs_f64();
    match outcome {
        Ok(()) => {
            ::metrics::histogram!("script_proxy_fetch_duration_seconds", "outcome" => "ok")
                .record(elapsed);
        }
        Err(kind) => {
            ::metrics::histogram!("script_proxy_fetch_duration_seconds", "outcome" => "error")
                .record(elapsed);
            ::metrics::counter!("script_proxy_fetch_errors_total", "kind" => kind).increment(1);
        }
    }
}
