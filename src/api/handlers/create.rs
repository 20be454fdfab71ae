//! Handler for the create endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::create::{CreateRequest, CreateResponse, DataResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "data": {
///     "key": "aZ3kP9q",
///     "long_url": "https://example.com/some/long/path",
///     "short_url": "https://s.example.com/aZ3kP9q"
///   }
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request for a malformed body or URL
/// - 500 Internal Server Error if no unique key could be minted
/// - 503 Service Unavailable if the store is unreachable
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<Json<DataResponse<CreateResponse>>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state.shortener.create(&payload.url).await?;

    Ok(Json(DataResponse { data: link.into() }))
}
