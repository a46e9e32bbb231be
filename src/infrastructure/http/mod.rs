// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the analyze-image service.
//!
//! Each image is posted as a multipart form with a single `image` field
//! carrying the raw file bytes. The JSON answer is validated by [`schema`].

pub mod schema;

use crate::application::port::{AnalyzeError, AnalyzeFuture, Analyzer};
use crate::media::ImageUpload;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// Multipart field carrying the image payload.
pub const IMAGE_FIELD: &str = "image";

const USER_AGENT: &str = concat!("AIGallery/", env!("CARGO_PKG_VERSION"));

/// Analyzer posting images to a remote endpoint.
#[derive(Debug, Clone)]
pub struct HttpAnalyzer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnalyzer {
    /// Builds a client for `endpoint`. A `timeout` of `None` waits forever.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::Network`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, AnalyzeError> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AnalyzeError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl Analyzer for HttpAnalyzer {
    fn analyze(&self, upload: ImageUpload) -> AnalyzeFuture {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        Box::pin(async move { post_image(&client, &endpoint, &upload).await })
    }
}

async fn post_image(
    client: &reqwest::Client,
    endpoint: &str,
    upload: &ImageUpload,
) -> Result<crate::domain::gallery::ImageAnalysis, AnalyzeError> {
    let bytes = tokio::fs::read(upload.path())
        .await
        .map_err(|e| AnalyzeError::Io(e.to_string()))?;

    let part = Part::bytes(bytes)
        .file_name(upload.file_name())
        .mime_str(upload.media_type())
        .map_err(|e| AnalyzeError::Network(e.to_string()))?;
    let form = Form::new().part(IMAGE_FIELD, part);

    let response = client
        .post(endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(map_transport_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(AnalyzeError::Rejected {
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(map_transport_error)?;
    schema::parse_analysis(&body)
}

fn map_transport_error(err: reqwest::Error) -> AnalyzeError {
    if err.is_timeout() {
        AnalyzeError::Timeout
    } else {
        AnalyzeError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Accepts one connection, records the raw request and answers with
    /// `status` and `body`. Returns the endpoint URL and the captured request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Vec<u8>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.expect("write");
            socket.shutdown().await.ok();
            request
        });
        (format!("http://{addr}/api/analyze-image"), handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> Vec<u8> {
        let mut request = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.expect("read");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request_complete(&request) {
                break;
            }
        }
        request
    }

    fn request_complete(request: &[u8]) -> bool {
        let Some(header_end) = find(request, b"\r\n\r\n") else {
            return false;
        };
        let headers = String::from_utf8_lossy(&request[..header_end]).to_lowercase();
        let body_len = request.len() - (header_end + 4);
        match headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
        {
            Some(expected) => body_len >= expected,
            None => request.ends_with(b"0\r\n\r\n"),
        }
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    fn image_on_disk(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> ImageUpload {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).expect("write image");
        ImageUpload::from_path(path).expect("image upload")
    }

    #[tokio::test]
    async fn posts_multipart_image_and_parses_response() {
        let (endpoint, server) = serve_once(
            "200 OK",
            r#"{"title":"Cat","prompt":"a cat","format":"PNG","keywords":["cat","pet"]}"#,
        )
        .await;
        let dir = tempfile::tempdir().expect("temp dir");
        let upload = image_on_disk(&dir, "cat.png", b"\x89PNG-fake-bytes");

        let analyzer = HttpAnalyzer::new(endpoint, Some(Duration::from_secs(5))).expect("client");
        let analysis = analyzer.analyze(upload).await.expect("analysis");

        assert_eq!(analysis.title, "Cat");
        assert_eq!(analysis.keywords, vec!["cat", "pet"]);

        let request = String::from_utf8_lossy(&server.await.expect("server")).into_owned();
        assert!(request.starts_with("POST /api/analyze-image"));
        assert!(request.contains("multipart/form-data"));
        assert!(request.contains("name=\"image\""));
        assert!(request.contains("filename=\"cat.png\""));
        assert!(request.contains("image/png"));
        assert!(request.contains("PNG-fake-bytes"));
    }

    #[tokio::test]
    async fn server_error_is_rejected_with_status() {
        let (endpoint, _server) = serve_once("500 Internal Server Error", "{}").await;
        let dir = tempfile::tempdir().expect("temp dir");
        let upload = image_on_disk(&dir, "dog.jpg", b"jpeg");

        let analyzer = HttpAnalyzer::new(endpoint, Some(Duration::from_secs(5))).expect("client");
        assert_eq!(
            analyzer.analyze(upload).await,
            Err(AnalyzeError::Rejected { status: 500 })
        );
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_response() {
        let (endpoint, _server) = serve_once("200 OK", r#"{"title":"Cat"}"#).await;
        let dir = tempfile::tempdir().expect("temp dir");
        let upload = image_on_disk(&dir, "cat.gif", b"GIF89a");

        let analyzer = HttpAnalyzer::new(endpoint, Some(Duration::from_secs(5))).expect("client");
        assert!(matches!(
            analyzer.analyze(upload).await,
            Err(AnalyzeError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn unreadable_file_fails_before_any_request() {
        let analyzer =
            HttpAnalyzer::new("http://127.0.0.1:9/unused", None).expect("client");
        let upload = ImageUpload::from_path(PathBuf::from("/definitely/not/here.png"))
            .expect("image upload");
        assert!(matches!(
            analyzer.analyze(upload).await,
            Err(AnalyzeError::Io(_))
        ));
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let _server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let _ = read_request(&mut socket).await;
            tokio::time::sleep(Duration::from_secs(5)).await;
        });
        let dir = tempfile::tempdir().expect("temp dir");
        let upload = image_on_disk(&dir, "slow.png", b"png");

        let analyzer = HttpAnalyzer::new(
            format!("http://{addr}/api/analyze-image"),
            Some(Duration::from_millis(200)),
        )
        .expect("client");
        assert_eq!(analyzer.analyze(upload).await, Err(AnalyzeError::Timeout));
    }
}
