//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST {api_base}`        - Create a short link
//! - `GET  {api_base}/{key}`  - Redirect to the long URL
//! - `GET  /health`           - Store health probe
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes and per-request tracing without path normalization.
///
/// `api_base_path` of `""` or `"/"` mounts create/resolve at the root.
pub fn build_router(state: AppState, api_base_path: &str) -> Router {
    let base = api_base_path.trim_end_matches('/');

    let router = Router::new().route("/health", get(health_handler));
    let router = if base.is_empty() {
        router.merge(api::routes::shortener_routes())
    } else {
        router.nest(base, api::routes::shortener_routes())
    };

    router.with_state(state).layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, api_base_path: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, api_base_path))
}
