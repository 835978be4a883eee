//! Errors raised while talking to n8n.

use invite_core::error::{AppError, ErrorKind};
use thiserror::Error;

/// Failure of a single n8n API call.
#[derive(Error, Debug)]
pub enum N8nError {
    /// The request could not be sent or the response body could not be read.
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// n8n answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code returned by n8n.
        status: u16,
        /// `message` field of the error body, or a generic description.
        message: String,
    },
}

impl N8nError {
    /// HTTP status returned by n8n, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Status { status, .. } => Some(*status),
        }
    }
}

impl From<N8nError> for AppError {
    fn from(err: N8nError) -> Self {
        let status = err.status();
        let message = err.to_string();
        let mut app = AppError::with_source(ErrorKind::ExternalService, message, err);
        app.upstream_status = status;
        app
    }
}
