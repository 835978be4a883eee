//! # invite-core
//!
//! Core crate for the n8n user manager. Contains the configuration schema,
//! the unified error system, the [`UserDirectory`](traits::UserDirectory)
//! abstraction over the remote user store, and small value helpers shared
//! by the other crates.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
