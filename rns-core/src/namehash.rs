//! ENS-style name hashing.
//!
//! `namehash("") = 0x00..00` and
//! `namehash(label.rest) = keccak256(namehash(rest) ++ keccak256(label))`.
//! Names are normalized (trimmed, lowercased) before hashing, so `Alice.RON`
//! and `alice.ron` share a node.

use sha3::{Digest, Keccak256};

use crate::constants::NAME_SUFFIX;
use crate::error::{Result, RnsError};
use crate::types::Namehash;

/// Normalizes a name: trims whitespace, lowercases, validates labels.
///
/// The empty name is valid and denotes the root node.
pub fn normalize_name(name: &str) -> Result<String> {
    let normalized = name.trim().to_lowercase();

    if normalized.is_empty() {
        return Ok(normalized);
    }

    for label in normalized.split('.') {
        if label.is_empty() {
            return Err(RnsError::InvalidName(format!(
                "'{}' contains an empty label",
                name
            )));
        }

        if label.chars().any(|c| c.is_whitespace() || c.is_control() || c == '/') {
            return Err(RnsError::InvalidName(format!(
                "label '{}' contains invalid characters",
                label
            )));
        }
    }

    Ok(normalized)
}

/// Normalizes a name and checks it ends with [`NAME_SUFFIX`].
///
/// The suffix alone (`.ron`) is rejected as an empty label.
pub fn validate_gateway_name(name: &str) -> Result<String> {
    let normalized = normalize_name(name)?;

    if !normalized.ends_with(NAME_SUFFIX) {
        return Err(RnsError::MissingSuffix {
            name: name.to_string(),
            suffix: NAME_SUFFIX,
        });
    }

    Ok(normalized)
}

/// Computes the namehash of a name.
pub fn namehash(name: &str) -> Result<Namehash> {
    let normalized = normalize_name(name)?;
    Ok(namehash_normalized(&normalized))
}

/// Computes the namehash of an already-normalized name.
fn namehash_normalized(name: &str) -> Namehash {
    let mut node = [0u8; 32];

    if name.is_empty() {
        return Namehash::from_array(node);
    }

    for label in name.rsplit('.') {
        let label_hash = Keccak256::digest(label.as_bytes());

        let mut hasher = Keccak256::new();
        hasher.update(node);
        hasher.update(label_hash);
        node = hasher.finalize().into();
    }

    Namehash::from_array(node)
}
