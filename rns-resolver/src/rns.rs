//! Registry client for reading content hashes.
//!
//! Talks plain JSON-RPC (`eth_call`, `eth_chainId`) to the configured node.
//! The endpoint URL embeds the API key, so it is never logged.

use std::time::Duration;

use alloy::primitives::{Address, Bytes};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use url::Url;

use rns_core::constants::{DEFAULT_RPC_URL, REGISTRY_CONTRACT_ADDRESS, RPC_TIMEOUT_SECS};
use rns_core::error::{Result, RnsError};
use rns_core::multihash::content_id;
use rns_core::namehash::namehash;
use rns_core::traits::NameResolver;

use crate::abi;

/// Registry client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RnsConfig {
    /// RPC base URL; the API key is appended verbatim
    pub rpc_url: String,
    /// RPC provider API key
    pub api_key: String,
    /// Registry contract address
    pub contract_address: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for RnsConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.into(),
            api_key: String::new(),
            contract_address: REGISTRY_CONTRACT_ADDRESS.into(),
            timeout_seconds: RPC_TIMEOUT_SECS,
        }
    }
}

impl RnsConfig {
    /// Creates a configuration for the given RPC base URL and API key.
    pub fn new(rpc_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Full endpoint: base URL followed by the API key.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.rpc_url, self.api_key)
    }
}

/// JSON-RPC reply envelope.
#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Read-only client for the name registry.
///
/// Built once at startup and shared by every request.
pub struct RnsClient {
    config: RnsConfig,
    endpoint: Url,
    contract: Address,
    http_client: reqwest::Client,
}

impl RnsClient {
    /// Creates a client without contacting the node.
    pub fn with_config(config: RnsConfig) -> Result<Self> {
        let contract: Address = config
            .contract_address
            .parse()
            .map_err(|e| RnsError::ConfigError(format!("invalid contract address: {}", e)))?;

        let endpoint = Url::parse(&config.endpoint())
            .map_err(|e| RnsError::ConfigError(format!("invalid RPC URL: {}", e)))?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| RnsError::ConfigError(e.to_string()))?;

        Ok(Self {
            config,
            endpoint,
            contract,
            http_client,
        })
    }

    /// Creates a client and checks the node answers `eth_chainId`.
    pub async fn connect(config: RnsConfig) -> Result<Self> {
        let client = Self::with_config(config)?;
        let chain_id = client.chain_id().await?;
        info!(chain_id, contract = %client.contract, "Connected to RPC node");
        Ok(client)
    }

    /// Returns the chain ID reported by the node.
    #[instrument(skip(self))]
    pub async fn chain_id(&self) -> Result<u64> {
        let result = self.rpc_call("eth_chainId", serde_json::json!([])).await?;

        let raw = result
            .as_str()
            .ok_or_else(|| RnsError::RpcError("eth_chainId result is not a string".into()))?;

        u64::from_str_radix(raw.trim_start_matches("0x"), 16)
            .map_err(|e| RnsError::RpcError(format!("invalid chain id '{}': {}", raw, e)))
    }

    /// Reads the raw content hash record for a name.
    ///
    /// An unset record comes back as empty bytes.
    #[instrument(skip(self))]
    pub async fn content_hash(&self, name: &str) -> Result<Bytes> {
        let node = namehash(name)?;
        let calldata = abi::encode_content_hash_call(&node);

        let params = serde_json::json!([
            {
                "to": self.contract.to_string(),
                "data": format!("0x{}", hex::encode(calldata)),
            },
            "latest"
        ]);

        let result = self.rpc_call("eth_call", params).await?;

        let raw = result
            .as_str()
            .ok_or_else(|| RnsError::RpcError("eth_call result is not a string".into()))?;

        let data = hex::decode(raw.strip_prefix("0x").unwrap_or(raw))
            .map_err(|e| RnsError::RpcError(format!("eth_call result is not hex: {}", e)))?;

        let content_hash = abi::decode_content_hash_return(&data)?;

        debug!(name, %node, len = content_hash.len(), "Read content hash");
        Ok(content_hash)
    }

    /// Resolves a name to the Base58 identifier of its content.
    #[instrument(skip(self))]
    pub async fn resolve(&self, name: &str) -> Result<String> {
        let content_hash = self.content_hash(name).await?;

        if content_hash.is_empty() {
            return Err(RnsError::EmptyContentHash(name.to_string()));
        }

        let id = content_id(&content_hash)?;
        debug!(name, content_id = %id, "Resolved content identifier");
        Ok(id)
    }

    /// Makes a JSON-RPC call and returns its `result`.
    async fn rpc_call(&self, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1
        });

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RnsError::RpcError(format!("{} returned HTTP {}", method, status)));
        }

        let reply: RpcResponse = response
            .json()
            .await
            .map_err(|e| RnsError::RpcError(format!("malformed {} reply: {}", method, e.without_url())))?;

        if let Some(error) = reply.error {
            warn!(method, code = error.code, error = %error.message, "RPC node rejected call");
            return Err(RnsError::RpcError(format!(
                "{} failed: {} (code {})",
                method, error.message, error.code
            )));
        }

        reply
            .result
            .ok_or_else(|| RnsError::RpcError(format!("{} reply has no result", method)))
    }

    fn transport_error(&self, err: reqwest::Error) -> RnsError {
        if err.is_timeout() {
            RnsError::RpcError(format!("timed out after {}s", self.config.timeout_seconds))
        } else {
            // the URL carries the API key
            RnsError::RpcError(err.without_url().to_string())
        }
    }
}

#[async_trait]
impl NameResolver for RnsClient {
    async fn resolve(&self, name: &str) -> Result<String> {
        RnsClient::resolve(self, name).await
    }
}
