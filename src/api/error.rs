//! Failure responses of the JSON API.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::errors::FieldError;

/// Errors surfaced to API clients as `{"error": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request carried no charges.
    #[error("No charges provided")]
    NoCharges,
    /// The body was not valid JSON or did not match the request schema.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The evaluators rejected the request parameters.
    #[error(transparent)]
    Field(FieldError),
    /// The evaluation task failed to complete.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status reported for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoCharges => StatusCode::BAD_REQUEST,
            Self::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Field(FieldError::ShapeMismatch { .. }) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Field(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::NoCharges => Self::NoCharges,
            other => Self::Field(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, error = %self, "request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_charges_is_a_client_error_with_its_own_message() {
        let err = ApiError::from(FieldError::NoCharges);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No charges provided");
    }

    #[test]
    fn bad_resolution_is_a_client_error() {
        let err = ApiError::from(FieldError::InvalidResolution { nx: 0, ny: 0 });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn reshape_failures_are_server_errors() {
        let err = ApiError::from(FieldError::ShapeMismatch { expected: 4, actual: 3 });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
