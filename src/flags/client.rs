//! Flag CDN Client
//!
//! HTTP client fetching flag PNGs from a public CDN.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use crate::config::FlagConfig;

const ACCEPT_IMAGES: &str = "image/avif,image/webp,image/apng,image/*,*/*;q=0.8";

/// Remote source of flag images
///
/// `code` is always a lowercase two-letter code.
#[async_trait]
pub trait FlagSource: Send + Sync {
    /// Fetch the image bytes for a code
    async fn fetch(&self, code: &str) -> Result<Vec<u8>, FlagFetchError>;

    /// URL the image is fetched from, for diagnostics
    fn url_for(&self, code: &str) -> String;
}

/// Build the CDN URL for a code: `<base>/<lowercase code>.png`
pub fn flag_url(base_url: &str, code: &str) -> String {
    format!(
        "{}/{}.png",
        base_url.trim_end_matches('/'),
        code.trim().to_lowercase()
    )
}

/// flagcdn.com client
pub struct FlagCdnClient {
    client: Client,
    base_url: String,
}

impl FlagCdnClient {
    /// Create a new client with the configured timeout and identification headers
    pub fn new(config: &FlagConfig) -> Result<Self, FlagFetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_IMAGES));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.cdn_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl FlagSource for FlagCdnClient {
    async fn fetch(&self, code: &str) -> Result<Vec<u8>, FlagFetchError> {
        let url = self.url_for(code);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                FlagFetchError::Timeout { url: url.clone() }
            } else if e.is_connect() {
                FlagFetchError::Unavailable { url: url.clone() }
            } else {
                FlagFetchError::Request(e)
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FlagFetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(FlagFetchError::EmptyBody { url });
        }

        tracing::debug!(url = %url, bytes = body.len(), "Fetched flag image");
        Ok(body.to_vec())
    }

    fn url_for(&self, code: &str) -> String {
        flag_url(&self.base_url, code)
    }
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when fetching a flag image
#[derive(Error, Debug)]
pub enum FlagFetchError {
    #[error("Flag CDN unreachable: {url}")]
    Unavailable { url: String },

    #[error("Request timeout: {url}")]
    Timeout { url: String },

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Empty body from {url}")]
    EmptyBody { url: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode as AxumStatus, routing::get, Router};

    #[test]
    fn test_flag_url() {
        assert_eq!(
            flag_url("https://flagcdn.com/w640", "BR"),
            "https://flagcdn.com/w640/br.png"
        );
        assert_eq!(
            flag_url("https://flagcdn.com/w640/", " jp "),
            "https://flagcdn.com/w640/jp.png"
        );
    }

    async fn spawn_cdn() -> String {
        let app = Router::new()
            .route("/w640/br.png", get(|| async { vec![0x89u8, b'P', b'N', b'G'] }))
            .route("/w640/xx.png", get(|| async { Vec::<u8>::new() }))
            .route("/w640/zz.png", get(|| async { AxumStatus::NOT_FOUND }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/w640", addr)
    }

    fn client_for(base_url: String) -> FlagCdnClient {
        let config = FlagConfig {
            cdn_base_url: base_url,
            request_timeout_secs: 5,
            ..Default::default()
        };
        FlagCdnClient::new(&config).unwrap()
    }

    #[test]
    fn test_client_urls_follow_base() {
        let client = client_for("https://cdn.example.test/w320/".to_string());
        assert_eq!(client.base_url(), "https://cdn.example.test/w320/");
        assert_eq!(client.url_for("MX"), "https://cdn.example.test/w320/mx.png");
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let client = client_for(spawn_cdn().await);
        let bytes = client.fetch("br").await.unwrap();
        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let client = client_for(spawn_cdn().await);
        let err = client.fetch("zz").await.unwrap_err();
        assert!(matches!(err, FlagFetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_empty_body() {
        let client = client_for(spawn_cdn().await);
        let err = client.fetch("xx").await.unwrap_err();
        assert!(matches!(err, FlagFetchError::EmptyBody { .. }));
    }

    #[tokio::test]
    async fn test_fetch_unreachable() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}/w640", addr));
        assert!(client.fetch("br").await.is_err());
    }
}
