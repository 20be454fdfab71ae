//! Handler for short key resolution.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;
use url::Url;

use crate::domain::errors::ShortenerError;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its long URL.
///
/// # Endpoint
///
/// `GET /api/{key}`
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL.
///
/// # Errors
///
/// - 404 Not Found for unknown or malformed keys
/// - 503 Service Unavailable if the store is unreachable
pub async fn resolve_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = state.shortener.resolve(&key).await.map_err(|err| match err {
        ShortenerError::InvalidInput(reason) => {
            debug!(%reason, "Rejected malformed key");
            AppError::not_found("Not found")
        }
        other => other.into(),
    })?;

    let location = location_header(&long_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` value, falling back to the URL's serialized ASCII form
/// (punycode host, percent-encoded path) for non-ASCII input.
fn location_header(long_url: &str) -> Result<HeaderValue, AppError> {
    if long_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(long_url)
    {
        return Ok(value);
    }

    Url::parse(long_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| AppError::internal("Stored URL cannot be used as a redirect target"))
}
