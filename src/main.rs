//! Script proxy
//!
//! Relays a remote shell script as plain text.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http::server ──▶ script handler            │
//!                           │   (request id,        │                      │
//!                           │    tracing)           ▼                      │
//!                           │               upstream::HttpScriptFetcher ───┼──▶ GET script_url
//!                           │                       │                      │
//!     Client Response       │                       ▼                      │
//!     ◀─────────────────────┼── http::response (200 text/plain | 500)      │
//!                           │                                              │
//!                           │   config · observability · lifecycle         │
//!                           └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use script_proxy::http::ScriptServer;
use script_proxy::lifecycle::{resolve_config, ConfigOverrides, Shutdown};
use script_proxy::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "script-proxy")]
#[command(about = "Relays a remote shell script as plain text", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listener bind address, overriding the config file.
    #[arg(short, long)]
    bind: Option<String>,

    /// Script URL, overriding the config file.
    #[arg(long)]
    script_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(&ConfigOverrides {
        config_path: cli.config,
        bind_address: cli.bind,
        script_url: cli.script_url,
    })?;

    logging::init_logging(&config.observability);

    tracing::info!("script-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        route_path = %config.listener.route_path,
        script_url = %config.upstream.script_url,
        status_policy = ?config.upstream.status_policy,
        timeout_secs = config.upstream.timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = ScriptServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
