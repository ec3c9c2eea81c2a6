//! Router configuration for the web server.

use axum::routing::get;
use axum::Router;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use super::ws::{room_ws_handler, WsState};

/// Create the WebSocket router.
pub fn create_ws_router(state: WsState) -> Router {
    Router::new()
        .route("/ws/:room_id", get(room_ws_handler))
        .with_state(state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// Create a static file router for the bundled web client.
///
/// Returns None when the directory does not exist.
pub fn create_static_router(static_path: &str) -> Option<Router> {
    if !Path::new(static_path).is_dir() {
        tracing::warn!(path = static_path, "static directory missing, not serving web client");
        return None;
    }
    Some(Router::new().fallback_service(ServeDir::new(static_path)))
}

/// Create the CORS layer.
///
/// The relay carries no credentials, so any origin is allowed, as the web
/// client may be served from elsewhere.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
}
