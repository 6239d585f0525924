//! Utility module - common helpers and types
//!
//! - [`AppError`] / [`ApiResponse`] - unified error types (from shared::error)
//! - Logging, date and input validation helpers

pub mod error;
pub mod logger;
pub mod time;
pub mod validation;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
