//! ABI encoding for the registry's `contentHash` read.

use alloy::primitives::{Bytes, B256};
use alloy::sol;
use alloy::sol_types::SolCall;

use rns_core::error::{Result, RnsError};
use rns_core::types::Namehash;

sol! {
    function contentHash(bytes32 node) external view returns (bytes);
}

/// Calldata for `contentHash(node)`: selector followed by the node.
pub(crate) fn encode_content_hash_call(node: &Namehash) -> Vec<u8> {
    contentHashCall {
        node: B256::from(*node.as_bytes()),
    }
    .abi_encode()
}

/// Decodes the `bytes` returned by `contentHash`.
pub(crate) fn decode_content_hash_return(data: &[u8]) -> Result<Bytes> {
    contentHashCall::abi_decode_returns(data, true)
        .map(|ret| ret._0)
        .map_err(|e| RnsError::AbiError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rns_core::constants::CONTENT_HASH_SIGNATURE;
    use sha3::{Digest, Keccak256};

    #[test]
    fn test_selector_matches_signature() {
        let hash = Keccak256::digest(CONTENT_HASH_SIGNATURE.as_bytes());
        assert_eq!(&contentHashCall::SELECTOR[..], &hash[..4]);
    }

    #[test]
    fn test_encode_layout() {
        let node = Namehash::from_array([0x11; 32]);
        let data = encode_content_hash_call(&node);

        assert_eq!(data.len(), 4 + 32);
        assert_eq!(&data[..4], &contentHashCall::SELECTOR);
        assert_eq!(&data[4..], node.as_bytes());
    }

    #[test]
    fn test_decode_bytes_return() {
        // offset, length, then the payload padded to 32 bytes
        let mut data = vec![0u8; 96];
        data[31] = 0x20;
        data[63] = 3;
        data[64..67].copy_from_slice(&[0xaa, 0xbb, 0xcc]);

        let decoded = decode_content_hash_return(&data).unwrap();
        assert_eq!(decoded.as_ref(), &[0xaa, 0xbb, 0xcc]);
    }

    #[test]
    fn test_decode_rejects_short_data() {
        assert!(matches!(
            decode_content_hash_return(&[]),
            Err(RnsError::AbiError(_))
        ));
        assert!(matches!(
            decode_content_hash_return(&[0u8; 16]),
            Err(RnsError::AbiError(_))
        ));
    }
}
