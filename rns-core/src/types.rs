//! Request-scoped values passed between the resolver, fetcher and server.

use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::constants::NAMEHASH_SIZE;

/// 32-byte ENS-style namehash, the registry lookup key for a name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Namehash(#[serde(with = "hex")] [u8; NAMEHASH_SIZE]);

impl Namehash {
    /// The namehash of the empty name (the root node).
    pub const ROOT: Namehash = Namehash([0u8; NAMEHASH_SIZE]);

    /// Wraps raw bytes.
    pub fn from_array(bytes: [u8; NAMEHASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; NAMEHASH_SIZE] {
        &self.0
    }

    /// Lowercase hex without `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Namehash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl From<Namehash> for [u8; NAMEHASH_SIZE] {
    fn from(node: Namehash) -> Self {
        node.0
    }
}

/// Content returned by the IPFS gateway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedContent {
    /// Full response body
    pub body: Bytes,
    /// `Content-Type` header, if the gateway sent one
    pub content_type: Option<String>,
}

impl FetchedContent {
    /// Creates fetched content from a body and optional content type.
    pub fn new(body: impl Into<Bytes>, content_type: Option<String>) -> Self {
        Self {
            body: body.into(),
            content_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namehash_display() {
        let node = Namehash::from_array([0xab; NAMEHASH_SIZE]);
        let shown = node.to_string();
        assert!(shown.starts_with("0xabab"));
        assert_eq!(shown.len(), 2 + NAMEHASH_SIZE * 2);
    }

    #[test]
    fn test_namehash_serde_hex() {
        let json = serde_json::to_string(&Namehash::ROOT).unwrap();
        assert_eq!(json, format!("\"{}\"", "0".repeat(64)));

        let back: Namehash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Namehash::ROOT);
    }
}
