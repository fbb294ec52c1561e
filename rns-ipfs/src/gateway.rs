//! IPFS gateway client implementation.
//!
//! One GET per identifier against `{gateway}/ipfs/{id}`, fully buffered.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument, warn};
use url::Url;

use rns_core::constants::{DEFAULT_IPFS_GATEWAY, GATEWAY_TIMEOUT_SECS};
use rns_core::error::{Result, RnsError};
use rns_core::traits::ContentFetcher;
use rns_core::types::FetchedContent;

/// IPFS gateway configuration.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct GatewayConfig {
    /// Gateway base URL (e.g. "https://ipfs.io")
    pub gateway_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_IPFS_GATEWAY.into(),
            timeout_seconds: GATEWAY_TIMEOUT_SECS,
        }
    }
}

impl GatewayConfig {
    /// Creates config for the given gateway base URL.
    pub fn new(gateway_url: impl Into<String>) -> Self {
        Self {
            gateway_url: gateway_url.into(),
            ..Default::default()
        }
    }
}

/// Client for downloading content through an IPFS HTTP gateway.
pub struct GatewayClient {
    config: GatewayConfig,
    base: String,
    http_client: reqwest::Client,
}

impl GatewayClient {
    /// Creates a new gateway client with the given config.
    pub fn with_config(config: GatewayConfig) -> Result<Self> {
        Url::parse(&config.gateway_url)
            .map_err(|e| RnsError::ConfigError(format!("invalid gateway URL: {}", e)))?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| RnsError::ConfigError(e.to_string()))?;

        Ok(Self {
            base: config.gateway_url.trim_end_matches('/').to_string(),
            config,
            http_client,
        })
    }

    /// Gateway URL for a content identifier.
    pub fn content_url(&self, content_id: &str) -> String {
        format!("{}/ipfs/{}", self.base, content_id)
    }

    /// Downloads content and its content type.
    ///
    /// Non-success statuses and timeouts are errors; no partial body is
    /// returned.
    #[instrument(skip(self))]
    pub async fn fetch(&self, content_id: &str) -> Result<FetchedContent> {
        if content_id.is_empty() {
            return Err(RnsError::InvalidMultihash("content identifier cannot be empty".into()));
        }

        let response = self
            .http_client
            .get(self.content_url(content_id))
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(content_id, %status, "Gateway returned error status");
            return Err(RnsError::GatewayStatus {
                content_id: content_id.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await.map_err(|e| self.request_error(e))?;

        debug!(content_id, bytes = body.len(), content_type = ?content_type, "Fetched content");
        Ok(FetchedContent::new(body, content_type))
    }

    fn request_error(&self, err: reqwest::Error) -> RnsError {
        if err.is_timeout() {
            RnsError::GatewayTimeout {
                seconds: self.config.timeout_seconds,
            }
        } else {
            RnsError::HttpError(err.to_string())
        }
    }
}

#[async_trait]
impl ContentFetcher for GatewayClient {
    async fn fetch(&self, content_id: &str) -> Result<FetchedContent> {
        GatewayClient::fetch(self, content_id).await
    }
}
