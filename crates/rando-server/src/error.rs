//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::composer::ComposeError;

/// Errors surfaced to API callers as `{"error": message}`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or insufficient caller input.
    #[error("{0}")]
    Validation(String),
    /// Well-formed input the providers could not satisfy.
    #[error("{0}")]
    Unprocessable(String),
    /// Non-success status passed through from an external service.
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },
    #[error("{0}")]
    Timeout(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream { status, .. } => *status,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ComposeError> for AppError {
    fn from(err: ComposeError) -> Self {
        match err {
            ComposeError::Validation(err) => AppError::Validation(err.to_string()),
            ComposeError::Internal(message) => AppError::Internal(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed ({}): {}", status, self);
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rando_core::ValidationError;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = AppError::from(ComposeError::Validation(ValidationError::TooFewWaypoints));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "at least two waypoints required");
    }

    #[test]
    fn internal_maps_to_server_error() {
        let err = AppError::from(ComposeError::Internal("boom".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_keeps_provider_status() {
        let err = AppError::Upstream {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: "slow down".to_string(),
        };
        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}
