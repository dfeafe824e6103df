// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the [`ImageGenerator`] port.
//!
//! Sends `{ "caption": ..., "prompt": ... }` as JSON to the configured
//! endpoint and expects the encoded image as the response body. Retry,
//! storage and authentication are left to the backend.

use crate::application::port::{
    GeneratedImage, GenerationError, GenerationFuture, GenerationRequest, ImageGenerator,
};
use serde::Serialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("PastForward/", env!("CARGO_PKG_VERSION"));

/// JSON body sent to the backend.
#[derive(Debug, Serialize)]
struct RequestBody<'a> {
    caption: &'a str,
    prompt: &'a str,
}

/// Generator backed by an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpGenerator {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl HttpGenerator {
    /// Builds a generator for `endpoint`.
    ///
    /// A missing endpoint is accepted; every request then fails with
    /// [`GenerationError::NotConfigured`] so the cards can show it.
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.filter(|e| !e.trim().is_empty()),
        })
    }

    /// Returns the configured endpoint, if any.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

impl ImageGenerator for HttpGenerator {
    fn generate(&self, request: GenerationRequest) -> GenerationFuture {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        Box::pin(async move {
            let endpoint = endpoint.ok_or(GenerationError::NotConfigured)?;

            let body = RequestBody {
                caption: request.caption.as_str(),
                prompt: &request.prompt,
            };

            let response = client
                .post(&endpoint)
                .json(&body)
                .send()
                .await
                .map_err(map_request_error)?;

            let status = response.status();
            if !status.is_success() {
                return Err(GenerationError::Status(status.as_u16()));
            }

            let bytes = response.bytes().await.map_err(map_request_error)?;
            if bytes.is_empty() {
                return Err(GenerationError::EmptyImage);
            }

            Ok(GeneratedImage::from_bytes(bytes.to_vec()))
        })
    }
}

fn map_request_error(err: reqwest::Error) -> GenerationError {
    if err.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::Request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Caption;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    fn request() -> GenerationRequest {
        GenerationRequest::from_template(Caption::new("1950s"), "{caption}")
    }

    /// Reads one request: headers plus a `Content-Length` body.
    async fn read_request(socket: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.expect("read request");
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);
            let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                return;
            }
        }
    }

    /// Serves a single canned response, optionally after a long stall.
    async fn serve_once(response: &'static [u8], stall: Option<Duration>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            read_request(&mut socket).await;
            if let Some(stall) = stall {
                tokio::time::sleep(stall).await;
            }
            let _ = socket.write_all(response).await;
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}/generate")
    }

    async fn generate_against(
        response: &'static [u8],
        stall: Option<Duration>,
        timeout: Duration,
    ) -> Result<GeneratedImage, GenerationError> {
        let endpoint = serve_once(response, stall).await;
        let generator = HttpGenerator::new(Some(endpoint), timeout).expect("client should build");
        generator.generate(request()).await
    }

    #[test]
    fn blank_endpoint_counts_as_missing() {
        let generator = HttpGenerator::new(Some("   ".into()), Duration::from_secs(5))
            .expect("client should build");
        assert!(generator.endpoint().is_none());
    }

    #[tokio::test]
    async fn missing_endpoint_reports_not_configured() {
        let generator =
            HttpGenerator::new(None, Duration::from_secs(5)).expect("client should build");

        let result = generator.generate(request()).await;
        assert_eq!(result, Err(GenerationError::NotConfigured));
    }

    #[tokio::test]
    async fn image_body_is_returned() {
        let result = generate_against(
            b"HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: 3\r\nConnection: close\r\n\r\n\x01\x02\x03",
            None,
            Duration::from_secs(5),
        )
        .await
        .expect("generation should succeed");

        assert_eq!(&result.bytes()[..], &[1u8, 2, 3]);
        assert!(result.url().starts_with("memory://"));
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let result = generate_against(
            b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            None,
            Duration::from_secs(5),
        )
        .await;

        assert_eq!(result, Err(GenerationError::Status(503)));
    }

    #[tokio::test]
    async fn empty_body_is_an_empty_image() {
        let result = generate_against(
            b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            None,
            Duration::from_secs(5),
        )
        .await;

        assert_eq!(result, Err(GenerationError::EmptyImage));
    }

    #[tokio::test]
    async fn stalled_backend_times_out() {
        let result = generate_against(
            b"HTTP/1.1 200 OK\r\nContent-Length: 1\r\nConnection: close\r\n\r\nx",
            Some(Duration::from_secs(5)),
            Duration::from_millis(200),
        )
        .await;

        assert_eq!(result, Err(GenerationError::Timeout));
    }
}
