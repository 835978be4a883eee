//! Workflow error taxonomy.

use serde_json::Value;
use thiserror::Error;

use invite_core::error::{AppError, ErrorKind};

/// Terminal outcome of a failed invitation attempt.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// No email was supplied.
    #[error("Email is required")]
    MissingEmail,

    /// No access code was supplied.
    #[error("Access code is required")]
    MissingAccessCode,

    /// The access code did not match the configured secret.
    #[error("Invalid access code. Please try again.")]
    InvalidAccessCode,

    /// The email already belongs to a directory member.
    #[error("This email is already registered. Please enter a different email.")]
    EmailAlreadyRegistered,

    /// The lookup or create call failed.
    #[error("{message}")]
    RemoteApi {
        /// Status returned by the remote API, when it answered at all.
        status: Option<u16>,
        /// Remote error message, or a transport/generic description.
        message: String,
    },

    /// The user was created remotely but no invitation link was found in
    /// the response. The remote user is not rolled back.
    #[error("User created but no invitation link was returned")]
    MissingInviteLink {
        /// The record the link was searched in.
        user_data: Value,
    },
}

/// Message used when a remote failure carries no description of its own.
pub const GENERIC_REMOTE_MESSAGE: &str = "Failed to add user to N8N";

impl From<AppError> for WorkflowError {
    fn from(err: AppError) -> Self {
        let status = match err.kind {
            ErrorKind::ExternalService => err.upstream_status,
            _ => None,
        };
        let message = if err.message.is_empty() {
            GENERIC_REMOTE_MESSAGE.to_string()
        } else {
            err.message
        };
        Self::RemoteApi { status, message }
    }
}
