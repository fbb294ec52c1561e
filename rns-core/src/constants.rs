//! Gateway constants.
//!
//! Registry location, default endpoints and timeouts.

// ═══════════════════════════════════════════════════════════════════════════════
// NAMING
// ═══════════════════════════════════════════════════════════════════════════════

/// Suffix every resolvable name must carry.
pub const NAME_SUFFIX: &str = ".ron";

/// Size of a namehash in bytes.
pub const NAMEHASH_SIZE: usize = 32;

// ═══════════════════════════════════════════════════════════════════════════════
// REGISTRY CONTRACT
// ═══════════════════════════════════════════════════════════════════════════════

/// Address of the registry contract exposing `contentHash(bytes32)`.
pub const REGISTRY_CONTRACT_ADDRESS: &str = "0xadb077d236d9e81fb24b96ae9cb8089ab9942d48";

/// Solidity signature of the only contract function the gateway reads.
pub const CONTENT_HASH_SIGNATURE: &str = "contentHash(bytes32)";

/// Default RPC endpoint. The API key is appended verbatim.
pub const DEFAULT_RPC_URL: &str = "https://api-gateway.skymavis.com/rpc?apikey=";

// ═══════════════════════════════════════════════════════════════════════════════
// CONTENT ADDRESSING
// ═══════════════════════════════════════════════════════════════════════════════

/// Largest multihash digest accepted, in bytes.
pub const MAX_DIGEST_SIZE: usize = 64;

/// EIP-1577 `ipfs-ns` namespace prefix (varint 0xe3).
pub const IPFS_NS_PREFIX: [u8; 2] = [0xe3, 0x01];

/// Default IPFS HTTP gateway.
pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io";

// ═══════════════════════════════════════════════════════════════════════════════
// TIMEOUTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Gateway fetch timeout in seconds.
pub const GATEWAY_TIMEOUT_SECS: u64 = 25;

/// RPC call timeout in seconds.
pub const RPC_TIMEOUT_SECS: u64 = 25;

// ═══════════════════════════════════════════════════════════════════════════════
// SERVER
// ═══════════════════════════════════════════════════════════════════════════════

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Fallback content type for anything that is not html, text or an image.
pub const OCTET_STREAM: &str = "application/octet-stream";
