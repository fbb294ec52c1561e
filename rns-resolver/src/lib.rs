//! # RNS Resolver
//!
//! Resolves `.ron` names to IPFS content identifiers by reading the
//! registry contract's `contentHash(bytes32)` over JSON-RPC.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod abi;
mod rns;

pub use rns::{RnsClient, RnsConfig};
