//! Request DTOs.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use invite_core::types::truthy_string;
use invite_service::InvitationRequest;

/// Body of `POST /api/add-user`.
///
/// Both fields accept any scalar; see [`truthy_string`] for how values are
/// coerced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddUserRequest {
    /// Email to invite.
    #[serde(default, deserialize_with = "loose_string")]
    pub email: Option<String>,
    /// Shared access code.
    #[serde(default, rename = "accessCode", deserialize_with = "loose_string")]
    pub access_code: Option<String>,
}

impl From<AddUserRequest> for InvitationRequest {
    fn from(req: AddUserRequest) -> Self {
        Self {
            email: req.email,
            access_code: req.access_code,
        }
    }
}

fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(truthy_string(&value))
}
