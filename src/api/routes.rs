//! API route configuration.

use crate::api::handlers::{create_handler, resolve_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Create and resolve routes, relative to the API base path.
///
/// # Endpoints
///
/// - `POST /`       - Create a short link
/// - `GET  /{key}`  - Redirect to the long URL
pub fn shortener_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_handler))
        .route("/{key}", get(resolve_handler))
}
