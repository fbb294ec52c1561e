//! IPFS gateway client for fetching content by identifier.

mod gateway;

pub use gateway::{GatewayClient, GatewayConfig};
