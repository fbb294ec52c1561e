//! Error types for the RNS gateway.
//!
//! Errors fall into three groups: bad client input, failures while resolving
//! a name on chain, and failures while fetching content from the gateway.

use thiserror::Error;

/// Result type alias using `RnsError`.
pub type Result<T> = std::result::Result<T, RnsError>;

/// Main error type for all gateway operations.
#[derive(Debug, Error)]
pub enum RnsError {
    // ═══════════════════════════════════════════════════════════════════════════
    // INPUT ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Name is empty or has a malformed label.
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// Name does not carry the required suffix.
    #[error("Name '{name}' does not end with '{suffix}'")]
    MissingSuffix { name: String, suffix: &'static str },

    /// Base58 string is not a valid multihash.
    #[error("Invalid multihash: {0}")]
    InvalidMultihash(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // RESOLUTION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// RPC call failed (transport, node rejection, malformed reply).
    #[error("RPC call failed: {0}")]
    RpcError(String),

    /// Contract call could not be encoded or its return value decoded.
    #[error("ABI error: {0}")]
    AbiError(String),

    /// Registry returned bytes that are not a content hash.
    #[error("Invalid content hash: {0}")]
    InvalidContentHash(String),

    /// Registry has no content hash for the name.
    #[error("No content hash set for '{0}'")]
    EmptyContentHash(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // FETCH ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// IPFS gateway did not answer in time.
    #[error("IPFS gateway timeout after {seconds}s")]
    GatewayTimeout { seconds: u64 },

    /// IPFS gateway answered with a non-success status.
    #[error("IPFS gateway returned {status} for '{content_id}'")]
    GatewayStatus { content_id: String, status: u16 },

    // ═══════════════════════════════════════════════════════════════════════════
    // MISC
    // ═══════════════════════════════════════════════════════════════════════════

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl RnsError {
    /// Returns true if the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RnsError::InvalidName(_)
                | RnsError::MissingSuffix { .. }
                | RnsError::InvalidMultihash(_)
        )
    }

    /// Returns true if the error happened while reading the registry.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            RnsError::RpcError(_)
                | RnsError::AbiError(_)
                | RnsError::InvalidContentHash(_)
                | RnsError::EmptyContentHash(_)
        )
    }

    /// Returns true if the error happened while talking to the IPFS gateway.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            RnsError::HttpError(_) | RnsError::GatewayTimeout { .. } | RnsError::GatewayStatus { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RnsError::GatewayStatus {
            content_id: "QmTest".into(),
            status: 502,
        };
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("QmTest"));

        let err = RnsError::MissingSuffix {
            name: "alice.eth".into(),
            suffix: ".ron",
        };
        assert_eq!(err.to_string(), "Name 'alice.eth' does not end with '.ron'");
    }

    #[test]
    fn test_error_classification() {
        assert!(RnsError::InvalidName("x".into()).is_client_error());
        assert!(RnsError::InvalidMultihash("x".into()).is_client_error());
        assert!(!RnsError::RpcError("x".into()).is_client_error());

        assert!(RnsError::AbiError("x".into()).is_resolution_error());
        assert!(RnsError::EmptyContentHash("a.ron".into()).is_resolution_error());
        assert!(!RnsError::GatewayTimeout { seconds: 25 }.is_resolution_error());

        assert!(RnsError::GatewayTimeout { seconds: 25 }.is_fetch_error());
        assert!(RnsError::HttpError("x".into()).is_fetch_error());
        assert!(!RnsError::InvalidName("x".into()).is_fetch_error());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_result: std::result::Result<serde_json::Value, _> = serde_json::from_str("invalid");
        let rns_result: Result<serde_json::Value> = json_result.map_err(RnsError::from);
        assert!(matches!(rns_result, Err(RnsError::JsonError(_))));
    }
}
