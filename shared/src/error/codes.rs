//! Unified error codes for the leave-management backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Leave-request ("kerelem") errors
//! - 4xxx: Attendance / sick-leave ("tappenz") errors
//! - 5xxx: Annual-plan ("terv") errors
//! - 6xxx: User errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Higher role rank required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,
    /// Record belongs to another user
    SelfAccessOnly = 2004,

    // ==================== 3xxx: Leave request ====================
    /// Leave request not found
    RequestNotFound = 3001,
    /// Request was already approved or rejected
    RequestAlreadyDecided = 3002,
    /// Submitter does not have enough remaining days
    InsufficientDays = 3003,
    /// Rejection requires a reason
    ReasonRequired = 3004,
    /// Target manager is not the submitter's assigned manager
    ManagerMismatch = 3005,

    // ==================== 4xxx: Attendance / sick leave ====================
    /// Sick-leave period not found
    SickLeaveNotFound = 4001,
    /// User already has an ongoing sick-leave period
    SickLeaveOngoing = 4002,
    /// User has no ongoing sick-leave period
    NoOngoingSickLeave = 4003,
    /// Leave record not found
    LeaveNotFound = 4004,

    // ==================== 5xxx: Annual plan ====================
    /// Annual plan not found
    PlanNotFound = 5001,
    /// Submitted plan is empty
    EmptyPlan = 5002,
    /// HR has not set the yearly allotment yet
    AllotmentNotSet = 5003,
    /// Plan does not use all allotted days
    NotAllDaysUsed = 5004,
    /// Plan uses more days than allotted
    TooManyDaysUsed = 5005,
    /// Plan was already filled out
    PlanAlreadyFilled = 5006,
    /// Bulk plan reset attempted outside the reset window
    ResetWindowClosed = 5007,

    // ==================== 6xxx: User ====================
    /// User not found
    UserNotFound = 6001,
    /// Email address already registered
    EmailExists = 6002,
    /// Referenced manager does not exist
    ManagerNotFound = 6003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
    /// Notification dispatch failed (best-effort, never fatal)
    NotificationFailed = 9004,
}

impl ErrorCode {
    /// Get the numeric value of this error code
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",

            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid email or password",
            Self::TokenExpired => "Token has expired",
            Self::TokenInvalid => "Token is invalid",

            Self::PermissionDenied => "Permission denied",
            Self::RoleRequired => "Insufficient role",
            Self::AdminRequired => "Admin role required",
            Self::SelfAccessOnly => "Record belongs to another user",

            Self::RequestNotFound => "Leave request not found",
            Self::RequestAlreadyDecided => "Request already approved or rejected",
            Self::InsufficientDays => "Not enough remaining days",
            Self::ReasonRequired => "Rejection reason is required",
            Self::ManagerMismatch => "Not the submitter's assigned manager",

            Self::SickLeaveNotFound => "Sick-leave period not found",
            Self::SickLeaveOngoing => "User already has an ongoing sick-leave period",
            Self::NoOngoingSickLeave => "No ongoing sick-leave period",
            Self::LeaveNotFound => "Leave record not found",

            Self::PlanNotFound => "Annual plan not found",
            Self::EmptyPlan => "Plan is empty",
            Self::AllotmentNotSet => "HR did not set the number of days yet",
            Self::NotAllDaysUsed => "Did not use all days",
            Self::TooManyDaysUsed => "Used more days than allowed",
            Self::PlanAlreadyFilled => "Plan already filled out",
            Self::ResetWindowClosed => "Plans can only be reset in January",

            Self::UserNotFound => "User not found",
            Self::EmailExists => "Email address already registered",
            Self::ManagerNotFound => "Manager not found",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
            Self::NotificationFailed => "Notification dispatch failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::RequiredField,

            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::TokenExpired,
            1004 => Self::TokenInvalid,

            2001 => Self::PermissionDenied,
            2002 => Self::RoleRequired,
            2003 => Self::AdminRequired,
            2004 => Self::SelfAccessOnly,

            3001 => Self::RequestNotFound,
            3002 => Self::RequestAlreadyDecided,
            3003 => Self::InsufficientDays,
            3004 => Self::ReasonRequired,
            3005 => Self::ManagerMismatch,

            4001 => Self::SickLeaveNotFound,
            4002 => Self::SickLeaveOngoing,
            4003 => Self::NoOngoingSickLeave,
            4004 => Self::LeaveNotFound,

            5001 => Self::PlanNotFound,
            5002 => Self::EmptyPlan,
            5003 => Self::AllotmentNotSet,
            5004 => Self::NotAllDaysUsed,
            5005 => Self::TooManyDaysUsed,
            5006 => Self::PlanAlreadyFilled,
            5007 => Self::ResetWindowClosed,

            6001 => Self::UserNotFound,
            6002 => Self::EmailExists,
            6003 => Self::ManagerNotFound,

            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::ConfigError,
            9004 => Self::NotificationFailed,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::NotAuthenticated,
            ErrorCode::PermissionDenied,
            ErrorCode::RequestAlreadyDecided,
            ErrorCode::SickLeaveOngoing,
            ErrorCode::PlanAlreadyFilled,
            ErrorCode::UserNotFound,
            ErrorCode::DatabaseError,
        ] {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(7777), Err(InvalidErrorCode(7777)));
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::InsufficientDays).unwrap();
        assert_eq!(json, "3003");
        let back: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorCode::InsufficientDays);
    }
}
