//! Outbound user record.

use serde::{Deserialize, Serialize};

/// A user to be created in the remote directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Email address the invitation is issued for.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Global role, e.g. `global:member`.
    pub role: String,
}
