use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use memo_core::codes::ErrorCode;
use memo_core::error::CoreError;

use crate::response::ErrorBody;
use crate::services::memo::ServiceError;

/// Message returned when a handler panics; the panic payload stays in the logs.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps service and domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{code, message}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An error from the memo service.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A domain-level error from `memo_core`, e.g. a rejected title.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request the framework could not decode (bad JSON, bad path id).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Service(ServiceError::Core(core)) | AppError::Core(core) => {
                classify_core_error(core)
            }
            AppError::Service(err) => {
                tracing::error!(error = %err, "Storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbErr,
                    err.public_message(),
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidParam, msg.clone())
            }
        };

        if !status.is_server_error() {
            tracing::info!(status = status.as_u16(), code = code.as_i32(), %message, "Request rejected");
        }

        (status, Json(ErrorBody { code, message })).into_response()
    }
}

/// Map a [`CoreError`] to an HTTP status, logical code, and message.
fn classify_core_error(err: &CoreError) -> (StatusCode, ErrorCode, String) {
    match err {
        CoreError::NotFound { code, .. } => {
            (StatusCode::NOT_FOUND, *code, code.message().to_string())
        }
        CoreError::Validation(msg) => {
            (StatusCode::BAD_REQUEST, ErrorCode::InvalidParam, msg.clone())
        }
    }
}

/// Panic handler for `CatchPanicLayer`: a panicking handler still answers
/// with the generic error envelope.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            code: ErrorCode::DbErr,
            message: INTERNAL_MESSAGE.to_string(),
        }),
    )
        .into_response()
}
