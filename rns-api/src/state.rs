//! App state: resolver, fetcher, config.

use std::str::FromStr;
use std::sync::Arc;

use rns_core::constants::{
    DEFAULT_IPFS_GATEWAY, DEFAULT_PORT, DEFAULT_RPC_URL, GATEWAY_TIMEOUT_SECS, RPC_TIMEOUT_SECS,
};
use rns_core::error::{Result, RnsError};
use rns_core::traits::{ContentFetcher, NameResolver};
use rns_ipfs::GatewayConfig;
use rns_resolver::RnsConfig;

use crate::render::RenderMode;

/// Server configuration, read from the environment.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// RPC base URL; the API key is appended to it.
    pub rpc_url: String,
    /// RPC API key.
    pub api_key: String,
    /// IPFS gateway base URL.
    pub gateway_url: String,
    /// Listen port.
    pub port: u16,
    /// How fetched content is rendered.
    pub render_mode: RenderMode,
    /// Timeout for RPC calls.
    pub rpc_timeout_seconds: u64,
    /// Timeout for gateway fetches.
    pub gateway_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.into(),
            api_key: String::new(),
            gateway_url: DEFAULT_IPFS_GATEWAY.into(),
            port: DEFAULT_PORT,
            render_mode: RenderMode::default(),
            rpc_timeout_seconds: RPC_TIMEOUT_SECS,
            gateway_timeout_seconds: GATEWAY_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Loads `.env` if present, then `RPC_URL`, `API_KEY`, `IPFS_GATEWAY`,
    /// `PORT` and `RENDER_MODE`. Unset variables fall back to defaults; set
    /// but unparseable ones are an error.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|_| {
                RnsError::ConfigError(format!("PORT must be a port number, got '{}'", v))
            })?,
            None => defaults.port,
        };

        let render_mode = match lookup("RENDER_MODE") {
            Some(v) => RenderMode::from_str(&v)
                .map_err(|e| RnsError::ConfigError(format!("RENDER_MODE: {}", e)))?,
            None => defaults.render_mode,
        };

        Ok(Self {
            rpc_url: lookup("RPC_URL").unwrap_or(defaults.rpc_url),
            api_key: lookup("API_KEY").unwrap_or_default(),
            gateway_url: lookup("IPFS_GATEWAY").unwrap_or(defaults.gateway_url),
            port,
            render_mode,
            ..defaults
        })
    }

    /// Registry client config.
    pub fn rns_config(&self) -> RnsConfig {
        RnsConfig {
            timeout_seconds: self.rpc_timeout_seconds,
            ..RnsConfig::new(&self.rpc_url, &self.api_key)
        }
    }

    /// Gateway client config.
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            gateway_url: self.gateway_url.clone(),
            timeout_seconds: self.gateway_timeout_seconds,
        }
    }
}

/// Shared state handed to every handler.
pub struct AppState {
    /// Server configuration.
    pub config: ApiConfig,
    /// Name to content id resolver.
    pub resolver: Arc<dyn NameResolver>,
    /// Content fetcher.
    pub fetcher: Arc<dyn ContentFetcher>,
}

impl AppState {
    /// Creates state from a config and its clients.
    pub fn new(
        config: ApiConfig,
        resolver: Arc<dyn NameResolver>,
        fetcher: Arc<dyn ContentFetcher>,
    ) -> Self {
        Self {
            config,
            resolver,
            fetcher,
        }
    }
}
