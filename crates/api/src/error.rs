//! Error-to-response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use spendwise_shared::AppError;

/// Result alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper turning an `AppError` into the wire error shape.
///
/// Bodies are `{"error": "<message>"}` with the status the error kind maps
/// to. Internal details are logged, never surfaced.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if status.is_server_error() {
            error!(error = %self.0, code = self.0.error_code(), "Request failed");
            "An internal error occurred".to_string()
        } else {
            self.0.message().to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
