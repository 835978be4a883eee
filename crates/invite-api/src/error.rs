//! Maps workflow and infrastructure errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use invite_service::WorkflowError;

use crate::dto::response::ErrorResponse;

/// An error ready to be rendered as `{success: false, error, debug?}`.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Message placed in the `error` field.
    pub message: String,
    /// Optional diagnostic payload placed in the `debug` field.
    pub debug: Option<Value>,
}

impl ApiError {
    /// Create an error with no debug payload.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            debug: None,
        }
    }

    /// Create a 400 error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

/// Remote statuses are passed through only when they describe an error.
fn upstream_status(status: Option<u16>) -> StatusCode {
    status
        .and_then(|s| StatusCode::from_u16(s).ok())
        .filter(|s| s.is_client_error() || s.is_server_error())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        let message = err.to_string();
        match err {
            WorkflowError::MissingEmail | WorkflowError::MissingAccessCode => {
                Self::new(StatusCode::BAD_REQUEST, message)
            }
            WorkflowError::InvalidAccessCode => Self::new(StatusCode::UNAUTHORIZED, message),
            WorkflowError::EmailAlreadyRegistered => Self::new(StatusCode::CONFLICT, message),
            WorkflowError::RemoteApi { status, .. } => Self::new(upstream_status(status), message),
            WorkflowError::MissingInviteLink { user_data } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message,
                debug: Some(user_data),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = self.status.as_u16(), error = %self.message, "Request failed");
        } else {
            tracing::warn!(status = self.status.as_u16(), error = %self.message, "Request rejected");
        }

        let body = ErrorResponse {
            success: false,
            error: self.message,
            debug: self.debug,
        };

        (self.status, Json(body)).into_response()
    }
}
