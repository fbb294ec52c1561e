//! DTOs for API responses.

use serde::{Deserialize, Serialize};

/// Response of the hash helper endpoints.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashResponse {
    /// Lowercase hex, no `0x` prefix
    pub hash: String,
}
