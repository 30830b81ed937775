//! API error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sello_core::error::SelloError;
use tracing::error;

/// Wrapper turning domain errors into HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub SelloError);

impl From<SelloError> for ApiError {
    fn from(err: SelloError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SelloError::NotFound { .. } => StatusCode::NOT_FOUND,
            SelloError::AlreadyExists { .. } => StatusCode::CONFLICT,
            SelloError::Validation { .. } | SelloError::TenantContext => StatusCode::BAD_REQUEST,
            SelloError::AuthorizationDenied { .. } => StatusCode::FORBIDDEN,
            SelloError::Database(_) | SelloError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self.0, "Request failed");
        }

        (status, self.0.to_string()).into_response()
    }
}
