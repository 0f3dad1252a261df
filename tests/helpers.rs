// Shared test helpers: minimal canned-response HTTP servers.
//
// Probe and engine tests talk to real sockets so timeout, redirect and
// connection-failure behavior is exercised end to end without external
// dependencies.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A canned HTTP response.
#[derive(Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
    pub location: Option<String>,
    pub delay: Duration,
}

impl CannedResponse {
    #[allow(dead_code)] // used by other test files
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            location: None,
            delay: Duration::ZERO,
        }
    }

    #[allow(dead_code)]
    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            location: None,
            delay: Duration::ZERO,
        }
    }

    #[allow(dead_code)]
    pub fn redirect_to(path: &str) -> Self {
        Self {
            status: 302,
            body: String::new(),
            location: Some(path.to_string()),
            delay: Duration::ZERO,
        }
    }

    #[allow(dead_code)]
    pub fn delayed(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }
}

/// Spawns a tiny HTTP server that answers every request via `handler`
/// (request path in, canned response out). Returns the bound address; the
/// server lives until the test's runtime shuts down.
#[allow(dead_code)] // used by other test files
pub async fn serve<F>(handler: F) -> SocketAddr
where
    F: Fn(&str) -> CannedResponse + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test server");
    let addr = listener.local_addr().expect("failed to read local addr");
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let handler = Arc::clone(&handler);

            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let path = request
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("/")
                    .to_string();

                let canned = handler(&path);
                if !canned.delay.is_zero() {
                    tokio::time::sleep(canned.delay).await;
                }

                let reason = match canned.status {
                    200 => "OK",
                    302 => "Found",
                    404 => "Not Found",
                    _ => "Unknown",
                };
                let location = canned
                    .location
                    .map(|l| format!("Location: {l}\r\n"))
                    .unwrap_or_default();
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n{}",
                    canned.status,
                    reason,
                    canned.body.len(),
                    location,
                    canned.body
                );

                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Spawns a server that answers every request identically.
#[allow(dead_code)] // used by other test files
pub async fn serve_static(canned: CannedResponse) -> SocketAddr {
    serve(move |_| canned.clone()).await
}

/// An address nothing is listening on (the listener is bound and dropped).
#[allow(dead_code)] // used by other test files
pub async fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind");
    let addr = listener.local_addr().expect("failed to read local addr");
    drop(listener);
    addr
}
