//! Seams between the HTTP layer and the outbound clients.
//!
//! The server only depends on these traits, so the registry client and the
//! gateway client can be swapped for in-memory fakes in tests.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::FetchedContent;

// ═══════════════════════════════════════════════════════════════════════════════
// RESOLVER TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Resolves a normalized name to the Base58 identifier of its content.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Looks up the name's content hash and returns it Base58-encoded.
    async fn resolve(&self, name: &str) -> Result<String>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// FETCHER TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Fetches content by identifier from a content-addressed store.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Downloads the full body for `content_id`, with its content type.
    async fn fetch(&self, content_id: &str) -> Result<FetchedContent>;
}
