//! HTTP-facing error type.
//!
//! Every failure leaving the gateway is rendered as
//! `{"error": {"code": "...", "message": "..."}}` with a matching status.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::domain::errors::ShortenerError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidInput { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Unavailable { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message) = match self {
            AppError::InvalidInput { message } => ("invalid_input", message),
            AppError::NotFound { message } => ("not_found", message),
            AppError::Unavailable { message } => ("unavailable", message),
            AppError::Internal { message } => ("internal_error", message),
        };

        ErrorInfo {
            code,
            message: message.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

/// Store details are logged, not echoed to clients.
impl From<ShortenerError> for AppError {
    fn from(err: ShortenerError) -> Self {
        match err {
            ShortenerError::InvalidInput(message) => AppError::bad_request(message),
            ShortenerError::NotFound => AppError::not_found("Not found"),
            ShortenerError::KeySpaceExhausted { .. } => {
                AppError::internal("Could not allocate a short key")
            }
            ShortenerError::StoreUnavailable(reason) => {
                tracing::warn!(%reason, "Store unavailable");
                AppError::unavailable("Service temporarily unavailable, please retry")
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{}: {}", field, msg),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect::<Vec<_>>()
            .join("; ");

        AppError::bad_request(if message.is_empty() {
            "Validation failed".to_string()
        } else {
            message
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Counts error-level events.
    struct ErrorEvents(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ErrorEvents {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_error_events(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorEvents(count.clone()));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn test_invalid_input_is_bad_request() {
        let err: AppError = ShortenerError::InvalidInput("bad url".to_string()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_error_info().code, "invalid_input");
        assert_eq!(err.to_error_info().message, "bad url");
    }

    #[test]
    fn test_not_found_status() {
        let err: AppError = ShortenerError::NotFound.into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_unavailable_hides_reason() {
        let err: AppError =
            ShortenerError::StoreUnavailable("redis://secret-host refused".to_string()).into();

        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(!err.to_error_info().message.contains("secret-host"));
    }

    #[test]
    fn test_exhaustion_is_internal_error() {
        let err: AppError = ShortenerError::KeySpaceExhausted { attempts: 5 }.into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_error_info().code, "internal_error");
    }

    #[test]
    fn test_response_status_matches_variant() {
        let response = AppError::unavailable("down").into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_exhaustion_logged_once_on_the_way_out() {
        let converted = count_error_events(|| {
            let _: AppError = ShortenerError::KeySpaceExhausted { attempts: 5 }.into();
        });
        assert_eq!(converted, 0);

        let responded = count_error_events(|| {
            let err: AppError = ShortenerError::KeySpaceExhausted { attempts: 5 }.into();
            let _ = err.into_response();
        });
        assert_eq!(responded, 1);
    }
}
