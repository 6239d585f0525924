//! Leave-management backend for a town-hall HR office
//!
//! # Architecture
//!
//! - **HTTP API** (`api`): RESTful endpoints under `/api`
//! - **Auth** (`auth`): JWT + Argon2, role-rank authorization
//! - **Database** (`db`): embedded SurrealDB storage
//! - **Attendance** (`attendance`): sick/on-leave day calculations
//! - **Plans** (`plans`): annual-plan validation
//! - **Notifications** (`notify`): fire-and-forget push and mail
//!
//! # Module layout
//!
//! ```text
//! leave-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT auth, role middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # models and repositories
//! ├── notify/        # notification queue, sessions
//! ├── attendance.rs  # attendance calculations
//! ├── plans.rs       # plan validation
//! └── utils/         # logging, dates, validation
//! ```

pub mod api;
pub mod attendance;
pub mod auth;
pub mod core;
pub mod db;
pub mod notify;
pub mod plans;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - supports tracing format specifiers
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
