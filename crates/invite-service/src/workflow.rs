//! The invitation workflow.
//!
//! Validate → AuthCheck → Lookup → DuplicateCheck → Create → ExtractLink.
//! The create call is only issued once the lookup has completed and the
//! duplicate check has passed.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use invite_core::traits::UserDirectory;
use invite_core::types::{NewUser, truthy_string};

use crate::access::verify_access_code;
use crate::error::WorkflowError;
use crate::extract::{invite_link, member_list, user_record};

/// First name given to every invited user.
pub const INVITEE_FIRST_NAME: &str = "Student";
/// Last name given to every invited user.
pub const INVITEE_LAST_NAME: &str = "User";
/// Global role given to every invited user.
pub const INVITEE_ROLE: &str = "global:member";

/// Input of a single invitation attempt.
///
/// Fields are already stringified; `None` means the caller did not supply
/// a usable value.
#[derive(Debug, Clone, Default)]
pub struct InvitationRequest {
    /// Email to invite, exactly as submitted.
    pub email: Option<String>,
    /// Shared access code presented by the caller.
    pub access_code: Option<String>,
}

/// Outcome of a successful invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationResult {
    /// Email that was invited.
    pub email: String,
    /// Link the invitee follows to set up their account.
    pub invite_url: String,
}

/// Runs invitation attempts against a [`UserDirectory`].
///
/// Holds no mutable state; one instance is shared by all requests.
#[derive(Clone)]
pub struct InvitationWorkflow {
    directory: Arc<dyn UserDirectory>,
    access_code: String,
}

impl fmt::Debug for InvitationWorkflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvitationWorkflow")
            .field("directory", &self.directory)
            .finish_non_exhaustive()
    }
}

impl InvitationWorkflow {
    /// Creates a workflow that checks access codes against `access_code`.
    pub fn new(directory: Arc<dyn UserDirectory>, access_code: impl Into<String>) -> Self {
        Self {
            directory,
            access_code: access_code.into(),
        }
    }

    /// Run one invitation attempt end to end.
    pub async fn handle(
        &self,
        request: InvitationRequest,
    ) -> Result<InvitationResult, WorkflowError> {
        let email = request
            .email
            .filter(|e| !e.is_empty())
            .ok_or(WorkflowError::MissingEmail)?;
        let access_code = request
            .access_code
            .filter(|c| !c.is_empty())
            .ok_or(WorkflowError::MissingAccessCode)?;

        if !verify_access_code(&access_code, &self.access_code) {
            warn!("Rejected invitation request with invalid access code");
            return Err(WorkflowError::InvalidAccessCode);
        }

        let listing = self.directory.list_users().await.map_err(|e| {
            error!(error = %e, status = ?e.upstream_status, "Failed to list n8n users");
            WorkflowError::from(e)
        })?;

        if is_registered(member_list(&listing), &email) {
            warn!(email = %email, "Email already registered in n8n");
            return Err(WorkflowError::EmailAlreadyRegistered);
        }

        let response = self
            .directory
            .create_users(&[invitee(&email)])
            .await
            .map_err(|e| {
                error!(error = %e, status = ?e.upstream_status, "Failed to create n8n user");
                WorkflowError::from(e)
            })?;

        debug!(response = %response, "n8n create-user response");
        let record = user_record(&response);
        debug!(user_data = %record, "n8n user data");

        let Some(link) = invite_link(record) else {
            error!(user_data = %record, "No invite URL found in n8n response");
            return Err(WorkflowError::MissingInviteLink {
                user_data: record.clone(),
            });
        };

        info!(email = %email, "User invited to n8n");

        Ok(InvitationResult {
            invite_url: link.to_string(),
            email,
        })
    }
}

/// The batch entry sent to n8n for `email`.
pub fn invitee(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        first_name: INVITEE_FIRST_NAME.to_string(),
        last_name: INVITEE_LAST_NAME.to_string(),
        role: INVITEE_ROLE.to_string(),
    }
}

/// Trim and lowercase an email for comparison.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Whether any member's email matches `email` after normalization.
///
/// Members without a usable `email` field never match.
pub fn is_registered(members: &[serde_json::Value], email: &str) -> bool {
    let wanted = normalize_email(email);
    members
        .iter()
        .filter_map(|member| member.get("email").and_then(truthy_string))
        .any(|existing| normalize_email(&existing) == wanted)
}
