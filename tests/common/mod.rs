//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use script_proxy::config::{ScriptProxyConfig, UpstreamStatusPolicy};
use script_proxy::http::ScriptServer;
use script_proxy::lifecycle::Shutdown;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn status_line(status: u16) -> String {
    let code = reqwest::StatusCode::from_u16(status).expect("valid status code");
    format!("{} {}", code.as_u16(), code.canonical_reason().unwrap_or(""))
}

/// Start a mock upstream whose response is computed per connection.
pub async fn start_programmable_upstream<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    start_programmable_upstream_with_type("text/plain; charset=utf-8", f).await
}

/// Like [`start_programmable_upstream`], with a custom `Content-Type`.
pub async fn start_programmable_upstream_with_type<F, Fut>(
    content_type: &'static str,
    f: F,
) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;

                let (status, body) = f().await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line(status),
                    content_type,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Start a mock upstream that always answers with the same status and body.
pub async fn start_mock_upstream(status: u16, body: &'static str) -> SocketAddr {
    start_programmable_upstream(move || async move { (status, body.to_string()) }).await
}

/// Start a mock upstream that accepts connections and never answers.
pub async fn start_stalled_upstream() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_secs(30)).await;
                drop(socket);
            });
        }
    });

    addr
}

/// Start a mock upstream that drops every connection without answering.
///
/// The listener keeps the port for the whole test.
pub async fn start_closing_upstream() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            drop(socket);
        }
    });

    addr
}

/// A running proxy instance.
pub struct TestProxy {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestProxy {
    pub fn url(&self) -> String {
        format!("http://{}/api/setup", self.addr)
    }
}

impl Drop for TestProxy {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the proxy pointed at `upstream`.
pub async fn start_proxy(upstream: SocketAddr, policy: UpstreamStatusPolicy) -> TestProxy {
    let script_url = format!("http://{}/janak0ff/zsh/main/setup_zsh.sh", upstream);
    start_proxy_at(script_url, policy).await
}

/// Start the proxy with an arbitrary script URL.
pub async fn start_proxy_at(script_url: String, policy: UpstreamStatusPolicy) -> TestProxy {
    let mut config = ScriptProxyConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.upstream.script_url = script_url;
    config.upstream.status_policy = policy;
    config.upstream.timeout_secs = 1;
    config.upstream.connect_timeout_secs = 1;

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = ScriptServer::new(config).unwrap();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestProxy { addr, shutdown }
}

/// Client without connection pooling or system proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
