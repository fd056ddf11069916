use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use auriva_core::CoreError;
use auriva_notify::NotifyError;

/// Application-level error type for HTTP handlers.
///
/// Wraps domain errors from `auriva_core` and dispatch errors from
/// `auriva_notify`, and implements [`IntoResponse`] to produce the fixed
/// JSON error bodies the front end expects. Internal detail is logged
/// server-side and never leaked to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error (validation, lookup).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A notification dispatch error (recipient resolution, transport).
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::Validation(detail)) => {
                tracing::debug!(%detail, "Booking request rejected");
                (StatusCode::BAD_REQUEST, "Missing required fields")
            }
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity = %entity, id = %id, "Lookup failed");
                (StatusCode::NOT_FOUND, "Event not found")
            }
            AppError::Notify(err) => {
                tracing::error!(error = %err, "Notification dispatch failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
