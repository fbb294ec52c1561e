//! API error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use rns_core::error::RnsError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    code: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: code.into(),
        }
    }

    /// Bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, "BAD_REQUEST")
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, "INTERNAL_ERROR")
    }

    /// Maps an upstream failure to a 500 carrying only `context`.
    ///
    /// Client errors still come back as 400.
    pub fn upstream(context: &'static str, err: RnsError) -> Self {
        if err.is_client_error() {
            return ApiError::from(err);
        }

        tracing::error!(error = %err, context, "Upstream failure");
        ApiError::internal(context)
    }

    /// HTTP status of this error.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<RnsError> for ApiError {
    fn from(err: RnsError) -> Self {
        if err.is_client_error() {
            return ApiError::bad_request(err.to_string());
        }

        tracing::error!(error = %err, "Internal error");
        ApiError::internal("An internal error occurred")
    }
}
