//! Shared domain models

mod role;

pub use role::{ParseRoleError, Role};
