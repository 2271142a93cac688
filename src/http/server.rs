//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum Router with the script handler mounted on `route_path`
//! - Wire up middleware (request ID, tracing)
//! - Serve on a bound listener until a signal or shutdown trigger arrives

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::ScriptProxyConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::http::response::script_response;
use crate::lifecycle::signals;
use crate::observability::metrics;
use crate::upstream::{HttpScriptFetcher, ScriptFetcher};

/// Application state injected into the handler.
pub struct AppState<F> {
    pub fetcher: Arc<F>,
}

impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
        }
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router<F: ScriptFetcher>(route_path: &str, fetcher: Arc<F>) -> Router {
    Router::new()
        .route(route_path, any(script_handler::<F>))
        .with_state(AppState { fetcher })
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(set_request_id_layer())
}

/// HTTP server for the script proxy.
pub struct ScriptServer {
    router: Router,
    config: ScriptProxyConfig,
}

impl ScriptServer {
    /// Create a server that fetches from the configured upstream over HTTP.
    pub fn new(config: ScriptProxyConfig) -> Result<Self, reqwest::Error> {
        let fetcher = HttpScriptFetcher::new(&config.upstream)?;
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Create a server around any script source.
    pub fn with_fetcher<F: ScriptFetcher>(config: ScriptProxyConfig, fetcher: F) -> Self {
        let router = build_router(&config.listener.route_path, Arc::new(fetcher));
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns after an OS shutdown signal or a message on `shutdown`, once
    /// in-flight requests have drained.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            route = %self.config.listener.route_path,
            script_url = %self.config.upstream.script_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Script handler. Method, headers and body of the request are ignored.
async fn script_handler<F: ScriptFetcher>(
    State(state): State<AppState<F>>,
    request: Request<Body>,
) -> Response {
    let request_id = request.request_id().to_owned();
    drop(request);

    let result = state.fetcher.fetch().await;
    match &result {
        Ok(script) => {
            tracing::debug!(request_id = %request_id, bytes = script.len(), "Script relayed");
        }
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Upstream fetch failed");
        }
    }

    let response = script_response(result);
    metrics::record_request(response.status().as_u16());
    response
}

/// Resolve on an OS signal or an explicit shutdown trigger.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        _ = signals::wait_for_signal() => {}
        res = shutdown.recv() => {
            // A dropped coordinator is not a shutdown request.
            if let Err(broadcast::error::RecvError::Closed) = res {
                std::future::pending::<()>().await;
            }
        }
    }
    tracing::info!("Shutdown signal received");
}
