//! # RNS Core
//!
//! Core types, errors, and hashing for the RNS gateway.
//!
//! This crate provides the building blocks shared by the resolver, the
//! IPFS fetcher and the HTTP server:
//!
//! - **Namehash**: ENS-style name hashing and name validation
//! - **Multihash**: decoding of on-chain content hashes and Base58 identifiers
//! - **Errors**: one error type covering input, resolution and fetch failures
//! - **Traits**: the resolver/fetcher seams the server is written against
//!
//! ## Example
//!
//! ```rust
//! use rns_core::namehash::namehash;
//!
//! let node = namehash("eth").unwrap();
//! assert_eq!(
//!     node.to_hex(),
//!     "93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod multihash;
pub mod namehash;
pub mod traits;
pub mod types;

pub use constants::*;
pub use error::{Result, RnsError};
pub use traits::*;
pub use types::*;
