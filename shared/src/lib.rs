//! Shared types for the leave-management backend
//!
//! Common types used by the server and its clients: the unified error
//! system, the role hierarchy, API DTOs and notification events.

pub mod client;
pub mod error;
pub mod models;
pub mod notify;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::Role;
pub use notify::{Notification, PushMessage};
