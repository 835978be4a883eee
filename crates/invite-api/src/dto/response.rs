//! Response DTOs.

use serde::{Deserialize, Serialize};

use invite_service::InvitationResult;

/// Body returned by `POST /api/add-user` on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// Invitation link for the new user.
    pub invite_url: String,
    /// The invited user.
    pub user: InvitedUser,
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitedUser {
    /// Email.
    pub email: String,
}

impl From<InvitationResult> for AddUserResponse {
    fn from(result: InvitationResult) -> Self {
        Self {
            success: true,
            message: "User added successfully".to_string(),
            invite_url: result.invite_url,
            user: InvitedUser {
                email: result.email,
            },
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Configured n8n base URL.
    #[serde(rename = "n8nUrl")]
    pub n8n_url: String,
}

/// Error envelope shared by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub error: String,
    /// Remote payload that explains the failure, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<serde_json::Value>,
}
