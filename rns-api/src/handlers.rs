//! API route handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use tracing::{debug, info};

use rns_core::multihash::{from_base58, to_hex};
use rns_core::namehash::{namehash, validate_gateway_name};

use crate::dto::HashResponse;
use crate::error::ApiError;
use crate::render::render;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

/// GET /health
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// GET /:name
///
/// Resolves the name on chain, fetches its content from the gateway and
/// relays it. Names without the `.ron` suffix are rejected before any
/// outbound call.
pub async fn serve_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Response> {
    let name = validate_gateway_name(&name)?;

    let content_id = state
        .resolver
        .resolve(&name)
        .await
        .map_err(|e| ApiError::upstream("Failed to get content hash", e))?;

    debug!(name = %name, content_id = %content_id, "Resolved name");

    let content = state
        .fetcher
        .fetch(&content_id)
        .await
        .map_err(|e| ApiError::upstream("Failed to load content", e))?;

    info!(
        name = %name,
        content_id = %content_id,
        bytes = content.body.len(),
        content_type = content.content_type.as_deref().unwrap_or("-"),
        "Serving content"
    );

    Ok(render(content, state.config.render_mode))
}

/// GET /hash/node/:name
pub async fn node_hash(Path(name): Path<String>) -> Result<Json<HashResponse>> {
    let node = namehash(&name)?;

    Ok(Json(HashResponse {
        hash: node.to_hex(),
    }))
}

/// GET /hash/ipfs/:hash
pub async fn ipfs_hash(Path(hash): Path<String>) -> Result<Json<HashResponse>> {
    let multihash = from_base58(&hash)?;

    Ok(Json(HashResponse {
        hash: to_hex(&multihash),
    }))
}
