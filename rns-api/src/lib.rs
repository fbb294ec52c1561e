//! # RNS Gateway API Server
//!
//! Serves IPFS content for `.ron` names.
//!
//! ## Endpoints
//!
//! - `GET /health` - Liveness probe
//! - `GET /:name` - Resolve a `.ron` name and relay its content
//! - `GET /hash/node/:name` - Namehash of a name
//! - `GET /hash/ipfs/:hash` - Hex form of a Base58 multihash
//!
//! ## Example
//!
//! ```rust,ignore
//! use rns_api::{ApiServer, ApiConfig};
//!
//! let config = ApiConfig::from_env()?;
//! let server = ApiServer::connect(config).await?;
//! server.run(([0, 0, 0, 0], 3000)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod dto;
mod error;
mod handlers;
mod render;
mod routes;
mod state;

pub use dto::HashResponse;
pub use error::ApiError;
pub use render::{render, ContentKind, RenderMode};
pub use routes::create_router;
pub use state::{ApiConfig, AppState};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderName;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use rns_core::error::Result;
use rns_ipfs::GatewayClient;
use rns_resolver::RnsClient;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// API server for the gateway.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a server around prepared state.
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    /// Builds the registry and gateway clients and checks the RPC node is
    /// reachable. Fails if it is not.
    pub async fn connect(config: ApiConfig) -> Result<Self> {
        let resolver = RnsClient::connect(config.rns_config()).await?;
        let fetcher = GatewayClient::with_config(config.gateway_config())?;

        info!(
            gateway = %config.gateway_url,
            render_mode = %config.render_mode,
            "Gateway clients ready"
        );

        Ok(Self::new(AppState::new(
            config,
            Arc::new(resolver),
            Arc::new(fetcher),
        )))
    }

    /// Creates the router with all routes and middleware configured.
    pub fn router(&self) -> Router {
        let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

        create_router(self.state.clone())
            .layer(CompressionLayer::new())
            .layer(PropagateRequestIdLayer::new(request_id.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
            .layer(CatchPanicLayer::new())
    }

    /// Runs the server on the given address.
    pub async fn run(self, addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("RNS gateway listening on {}", addr);

        axum::serve(listener, self.router()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;

    use rns_core::traits::{ContentFetcher, NameResolver};
    use rns_core::types::FetchedContent;

    const CID_V0: &str = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";

    struct StaticResolver {
        panics: bool,
    }

    #[async_trait]
    impl NameResolver for StaticResolver {
        async fn resolve(&self, _name: &str) -> Result<String> {
            if self.panics {
                panic!("resolver blew up");
            }
            Ok(CID_V0.to_string())
        }
    }

    struct LargeHtmlFetcher;

    #[async_trait]
    impl ContentFetcher for LargeHtmlFetcher {
        async fn fetch(&self, _content_id: &str) -> Result<FetchedContent> {
            let body = "<p>hello</p>".repeat(512);
            Ok(FetchedContent::new(body.into_bytes(), Some("text/html".into())))
        }
    }

    fn server(panics: bool) -> ApiServer {
        ApiServer::new(AppState::new(
            ApiConfig::default(),
            Arc::new(StaticResolver { panics }),
            Arc::new(LargeHtmlFetcher),
        ))
    }

    async fn send(server: &ApiServer, request: Request<Body>) -> Response {
        server.router().oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_sets_request_id() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = send(&server(false), request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
        assert!(!id.is_empty());
    }

    #[tokio::test]
    async fn test_keeps_caller_request_id() {
        let request = Request::builder()
            .uri("/health")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();
        let response = send(&server(false), request).await;

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");
    }

    #[tokio::test]
    async fn test_compresses_when_accepted() {
        let request = Request::builder()
            .uri("/alice.ron")
            .header(header::ACCEPT_ENCODING, "gzip")
            .body(Body::empty())
            .unwrap();
        let response = send(&server(false), request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_ENCODING], "gzip");
    }

    #[tokio::test]
    async fn test_uncompressed_without_accept_encoding() {
        let request = Request::builder().uri("/alice.ron").body(Body::empty()).unwrap();
        let response = send(&server(false), request).await;

        assert!(response.headers().get(header::CONTENT_ENCODING).is_none());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body.len(), "<p>hello</p>".len() * 512);
    }

    #[tokio::test]
    async fn test_handler_panic_is_500() {
        let request = Request::builder().uri("/alice.ron").body(Body::empty()).unwrap();
        let response = send(&server(true), request).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
