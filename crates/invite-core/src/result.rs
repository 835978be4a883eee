//! Convenience result type alias.

use crate::error::AppError;

/// A specialized `Result` type for operations that fail with [`AppError`].
pub type AppResult<T> = Result<T, AppError>;
