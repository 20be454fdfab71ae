//! HTTP request/response tracing middleware.

use axum::extract::{MatchedPath, Request};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultOnBodyChunk, DefaultOnEos, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, Span};

/// Trace layer with a per-request span and no failure hook.
pub type HttpTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    fn(&Request) -> Span,
    DefaultOnRequest,
    DefaultOnResponse,
    DefaultOnBodyChunk,
    DefaultOnEos,
    (),
>;

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span carrying method, URI, and the matched
/// route template (`/api/{key}` rather than the concrete key). Responses are
/// logged with status and latency in milliseconds.
///
/// 5xx failures are not logged here; [`crate::error::AppError`] logs them
/// with the underlying cause.
///
/// ```text
/// INFO request{method=GET uri=/api/aZ3kP9q matched_path="/api/{key}"}: finished processing request latency=1 ms status=302
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as fn(&Request) -> Span)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(())
}

fn make_span(req: &Request) -> Span {
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched_path| matched_path.as_str());

    tracing::info_span!(
        "request",
        method = %req.method(),
        uri = %req.uri(),
        matched_path
    )
}
