//! Repository Module
//!
//! CRUD and transactional operations over the SurrealDB tables.
//! State transitions with invariants (approval, sick-leave start, plan
//! submission) run as single transactions that `THROW` a marker string
//! when a guard fails; [`RepoError::from_db`] maps those markers back
//! to precise error codes.

pub mod leave;
pub mod message;
pub mod plan;
pub mod request;
pub mod sick_leave;
pub mod user;

// Re-exports
pub use leave::LeaveRepository;
pub use message::MessageRepository;
pub use plan::PlanRepository;
pub use request::RequestRepository;
pub use sick_leave::SickLeaveRepository;
pub use user::UserRepository;

use shared::{AppError, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A domain error with a precise code, raised from a transaction guard
    #[error("{0}")]
    App(AppError),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl RepoError {
    /// Map a database error to a domain error
    ///
    /// Transaction guards `THROW` marker strings; anything else stays a
    /// database error.
    pub fn from_db(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        let code = if msg.contains("request_not_found") {
            Some(ErrorCode::RequestNotFound)
        } else if msg.contains("already_decided") {
            Some(ErrorCode::RequestAlreadyDecided)
        } else if msg.contains("insufficient_days") {
            Some(ErrorCode::InsufficientDays)
        } else if msg.contains("ongoing_exists") {
            Some(ErrorCode::SickLeaveOngoing)
        } else if msg.contains("no_ongoing") {
            Some(ErrorCode::NoOngoingSickLeave)
        } else if msg.contains("plan_filled_out") {
            Some(ErrorCode::PlanAlreadyFilled)
        } else if msg.contains("plan_not_found") {
            Some(ErrorCode::PlanNotFound)
        } else {
            None
        };

        match code {
            Some(code) => RepoError::App(AppError::new(code)),
            None => RepoError::Database(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::App(app) => app,
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
