//! # invite-n8n
//!
//! Thin reqwest client for the user endpoints of the n8n public REST API
//! (`/api/v1/users`). Implements [`UserDirectory`](invite_core::traits::UserDirectory)
//! so the invitation workflow never touches HTTP directly.

pub mod client;
pub mod error;

pub use client::N8nClient;
pub use error::N8nError;
