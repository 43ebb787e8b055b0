use std::any::Any;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use todo_core::error::CoreError;
use utoipa::ToSchema;

/// Message returned in place of internal error details.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "detail": ... }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body was missing, not JSON, or the wrong shape.
    #[error(transparent)]
    Json(#[from] JsonRejection),

    /// A path segment did not parse (e.g. a non-integer id).
    #[error(transparent)]
    Path(#[from] PathRejection),

    /// A query string parameter did not parse.
    #[error(transparent)]
    Query(#[from] QueryRejection),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Error body shape shared by every failing response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(core @ CoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, core.to_string())
            }

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }

            AppError::Json(rejection) => (rejection.status(), rejection.body_text()),
            AppError::Path(rejection) => (rejection.status(), rejection.body_text()),
            AppError::Query(rejection) => (rejection.status(), rejection.body_text()),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        (status, axum::Json(ErrorBody { detail })).into_response()
    }
}

/// Response used by the panic-catching layer.
///
/// The panic payload is logged, never sent to the client.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::InternalError(format!("handler panicked: {message}")).into_response()
}
