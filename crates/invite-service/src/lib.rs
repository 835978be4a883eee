//! # invite-service
//!
//! The invitation workflow: validate input, check the shared access code,
//! look the email up in the remote directory, and invite it when absent.
//!
//! Each stage is a terminal failure exit; there are no retries and no
//! state survives a single call.

pub mod access;
pub mod error;
pub mod extract;
pub mod workflow;

pub use error::WorkflowError;
pub use workflow::{InvitationRequest, InvitationResult, InvitationWorkflow};
