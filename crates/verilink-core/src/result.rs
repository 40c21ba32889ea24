//! Convenience result type alias for Verilink.

use crate::error::AppError;

/// A specialized `Result` type for Verilink operations.
pub type AppResult<T> = Result<T, AppError>;
