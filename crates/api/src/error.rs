use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use escola_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the database variant.
/// Implements [`IntoResponse`] so every failure path produces the service's
/// `{"message": ...}` body: 404 for a lookup miss, 500 with the driver error
/// for anything the database reports.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `escola_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx, surfaced verbatim.
    #[error("Erro de banco de dados: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Core(CoreError::NotFound { message }) => {
                (StatusCode::NOT_FOUND, message.to_string())
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
