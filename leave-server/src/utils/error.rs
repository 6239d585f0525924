//! Error handling - re-exports the unified error system from `shared`
//!
//! Handlers return [`AppResult`] and convert domain failures with `?`.

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
