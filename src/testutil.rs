// src/testutil.rs
// =============================================================================
// Helpers shared by tests in several modules.
// =============================================================================

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Body sent by `serve_truncated` before it hangs up
pub const TRUNCATED_BODY: &str = r#"<a href="/x">X</a>"#;

/// Starts a server that promises a 1000-byte body, sends only
/// `TRUNCATED_BODY`, then closes the connection.
///
/// Returns the URL to fetch.
pub async fn serve_truncated() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                // Read the whole request head so closing doesn't reset the connection
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let head = "HTTP/1.1 200 OK\r\n\
                            Content-Type: text/html\r\n\
                            Content-Length: 1000\r\n\
                            Connection: close\r\n\r\n";
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.write_all(TRUNCATED_BODY.as_bytes()).await;
                let _ = socket.flush().await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}/", addr)
}
