//! Core type definitions used across the workspace.

pub mod loose;
pub mod user;

pub use loose::truthy_string;
pub use user::NewUser;
