//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::RequestNotFound
            | Self::SickLeaveNotFound
            | Self::NoOngoingSickLeave
            | Self::LeaveNotFound
            | Self::PlanNotFound
            | Self::UserNotFound
            | Self::ManagerNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict (entity in the wrong state for the transition)
            Self::AlreadyExists
            | Self::RequestAlreadyDecided
            | Self::SickLeaveOngoing
            | Self::PlanAlreadyFilled
            | Self::EmailExists => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied
            | Self::RoleRequired
            | Self::AdminRequired
            | Self::SelfAccessOnly
            | Self::InsufficientDays
            | Self::ManagerMismatch
            | Self::ResetWindowClosed => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError
            | Self::NotificationFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::RequestNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::UserNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(
            ErrorCode::RequestAlreadyDecided.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::PlanAlreadyFilled.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::SickLeaveOngoing.http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_auth_status() {
        assert_eq!(
            ErrorCode::NotAuthenticated.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::PermissionDenied.http_status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_validation_defaults_to_bad_request() {
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::EmptyPlan.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::NotAllDaysUsed.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
