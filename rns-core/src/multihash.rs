//! Multihash decoding for on-chain content hashes and Base58 identifiers.
//!
//! The registry stores a raw multihash (`<code varint><len varint><digest>`).
//! EIP-1577 `ipfs-ns` content hashes are accepted as well; the CID's
//! multihash is used. Either way the gateway is addressed with the Base58
//! encoding of the multihash bytes (`Qm...` for sha2-256).

use cid::Cid;

use crate::constants::{IPFS_NS_PREFIX, MAX_DIGEST_SIZE};
use crate::error::{Result, RnsError};

/// Multihash with room for digests up to [`MAX_DIGEST_SIZE`] bytes.
pub type Multihash = ::multihash::Multihash<MAX_DIGEST_SIZE>;

/// Multicodec code for sha2-256.
pub const SHA2_256: u64 = 0x12;

/// Decodes an on-chain content hash into a multihash.
///
/// Bytes following a well-formed multihash are ignored.
pub fn decode_content_hash(bytes: &[u8]) -> Result<Multihash> {
    if bytes.is_empty() {
        return Err(RnsError::InvalidContentHash("content hash is empty".into()));
    }

    if let Some(cid_bytes) = bytes.strip_prefix(&IPFS_NS_PREFIX[..]) {
        let cid = Cid::read_bytes(cid_bytes)
            .map_err(|e| RnsError::InvalidContentHash(format!("bad ipfs-ns CID: {}", e)))?;
        return Ok(cid.hash().to_owned());
    }

    let mut reader = bytes;
    Multihash::read(&mut reader).map_err(|e| RnsError::InvalidContentHash(e.to_string()))
}

/// Base58btc encoding of the multihash bytes.
pub fn to_base58(hash: &Multihash) -> String {
    bs58::encode(hash.to_bytes()).into_string()
}

/// Parses a Base58btc multihash string. The whole input must be consumed.
pub fn from_base58(encoded: &str) -> Result<Multihash> {
    let bytes = bs58::decode(encoded.trim())
        .into_vec()
        .map_err(|e| RnsError::InvalidMultihash(e.to_string()))?;

    Multihash::from_bytes(&bytes).map_err(|e| RnsError::InvalidMultihash(e.to_string()))
}

/// Lowercase hex of the full multihash bytes (code, length and digest).
pub fn to_hex(hash: &Multihash) -> String {
    hex::encode(hash.to_bytes())
}

/// Decodes a content hash straight to the Base58 identifier used with the gateway.
pub fn content_id(bytes: &[u8]) -> Result<String> {
    decode_content_hash(bytes).map(|hash| to_base58(&hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CID_V0: &str = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";
    const CID_V0_HEX: &str = "12209d6c2be50f706953479ab9df2ce3edca90b68053c00b3004b7f0accbe1e8eedf";

    #[test]
    fn test_wrap_and_decode() {
        let digest: Vec<u8> = (0u8..32).collect();
        let hash = Multihash::wrap(SHA2_256, &digest).unwrap();

        let decoded = decode_content_hash(&hash.to_bytes()).unwrap();
        assert_eq!(decoded.code(), SHA2_256);
        assert_eq!(decoded.size(), 32);
        assert_eq!(decoded.digest(), digest.as_slice());

        assert_eq!(to_base58(&decoded), "QmNLfbof5rLekrACjeuLk9JmGZD2HDBHCU4z16iYKmx5SE");
    }

    #[test]
    fn test_known_cid_v0() {
        let hash = from_base58(CID_V0).unwrap();
        assert_eq!(to_hex(&hash), CID_V0_HEX);
        assert_eq!(content_id(&hex::decode(CID_V0_HEX).unwrap()).unwrap(), CID_V0);
    }

    #[test]
    fn test_trailing_bytes_ignored_on_chain() {
        let mut bytes = hex::decode(CID_V0_HEX).unwrap();
        bytes.extend_from_slice(&[0u8; 4]);
        assert_eq!(content_id(&bytes).unwrap(), CID_V0);
    }

    #[test]
    fn test_ipfs_ns_content_hash() {
        let hash = from_base58(CID_V0).unwrap();
        let cid = Cid::new_v1(0x70, hash);

        let mut bytes = IPFS_NS_PREFIX.to_vec();
        bytes.extend_from_slice(&cid.to_bytes());

        assert_eq!(content_id(&bytes).unwrap(), CID_V0);
    }

    #[test]
    fn test_malformed_content_hash() {
        assert!(matches!(
            decode_content_hash(&[]),
            Err(RnsError::InvalidContentHash(_))
        ));
        // declares a 32-byte digest but carries only 3 bytes
        assert!(matches!(
            decode_content_hash(&[0x12, 0x20, 0x01, 0x02, 0x03]),
            Err(RnsError::InvalidContentHash(_))
        ));
        assert!(matches!(
            decode_content_hash(&[0xe3, 0x01, 0xff]),
            Err(RnsError::InvalidContentHash(_))
        ));
    }

    #[test]
    fn test_from_base58_rejects_garbage() {
        // '0' and 'l' are outside the base58 alphabet
        assert!(matches!(from_base58("0l0l"), Err(RnsError::InvalidMultihash(_))));
        // valid base58, but not a complete multihash
        assert!(matches!(from_base58("Qm"), Err(RnsError::InvalidMultihash(_))));
        assert!(matches!(from_base58(""), Err(RnsError::InvalidMultihash(_))));
    }

    #[test]
    fn test_from_base58_rejects_trailing_bytes() {
        let mut bytes = hex::decode(CID_V0_HEX).unwrap();
        bytes.push(0x00);
        let encoded = bs58::encode(bytes).into_string();
        assert!(from_base58(&encoded).is_err());
    }
}
