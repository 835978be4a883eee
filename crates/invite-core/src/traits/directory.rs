//! Abstraction over the remote user directory.

use async_trait::async_trait;
use serde_json::Value;

use crate::result::AppResult;
use crate::types::NewUser;

/// Read/write access to the remote platform's user directory.
///
/// Payloads are returned untyped: the remote API does not guarantee a
/// stable response shape, and interpreting it is left to the caller.
/// Implementations must report remote failures as
/// [`ErrorKind::ExternalService`](crate::error::ErrorKind::ExternalService)
/// errors, carrying the remote HTTP status when one was received.
#[async_trait]
pub trait UserDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch the current member listing.
    async fn list_users(&self) -> AppResult<Value>;

    /// Create (invite) a batch of users.
    async fn create_users(&self, users: &[NewUser]) -> AppResult<Value>;
}
