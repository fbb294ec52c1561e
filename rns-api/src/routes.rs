//! API route configuration.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))

        // Hash helpers
        .route("/hash/node/:name", get(handlers::node_hash))
        .route("/hash/ipfs/:hash", get(handlers::ipfs_hash))

        // Name gateway
        .route("/:name", get(handlers::serve_name))

        .with_state(state)
}
