//! Request/response DTOs shared between the server and its clients

use crate::models::Role;
use serde::{Deserialize, Serialize};

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response: the signed token plus the authenticated user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Public view of a user account
///
/// `sick` and `on_leave` are computed from the attendance records at
/// read time, they are not stored on the user row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    /// Yearly paid-leave allotment
    pub max_days: u32,
    /// Paid-leave days still available this year
    pub remaining_days: u32,
    /// Whether the user is on sick leave today
    #[serde(default)]
    pub sick: bool,
    /// Whether the user is on approved leave today
    #[serde(default)]
    pub on_leave: bool,
}
