//! One-shot canned-response HTTP server for exercising the client's
//! failure paths without a real endpoint.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

use super::Client;
use crate::config::Credentials;

/// Spawn a loopback server that accepts one connection, reads the full
/// request, and answers with the given status line and body.
///
/// Returns a client pointed at the server plus a handle yielding the raw
/// request bytes; await the handle so a server-side panic fails the test.
pub(super) async fn canned_server(status: &str, body: &str) -> (Client, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let server = tokio::spawn(async move {
        let (mut conn, _) = listener.accept().await.unwrap();
        let mut request = Vec::with_capacity(2048);
        let mut scratch = [0u8; 1024];
        loop {
            let n = conn.read(&mut scratch).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&scratch[..n]);
            if request_complete(&request) {
                break;
            }
        }
        conn.write_all(response.as_bytes()).await.unwrap();
        let _ = conn.shutdown().await;
        request
    });

    let base_url = Url::parse(&format!("http://{addr}")).unwrap();
    let client = Client::with_base_url(base_url, Credentials::new("AK1", "s3cr3t"));
    (client, server)
}

/// A request is complete once the headers have ended and any declared
/// Content-Length worth of body has arrived.
fn request_complete(request: &[u8]) -> bool {
    let Some(headers_end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let headers = String::from_utf8_lossy(&request[..headers_end]);
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);
    request.len() >= headers_end + 4 + content_length
}
