//! Authentication middleware
//!
//! Axum middleware for JWT authentication and role-rank authorization.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::{ErrorCode, Role};

use crate::AppError;
use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::security_log;

/// Authentication middleware - requires a logged-in user
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`.
/// On success the [`CurrentUser`] is injected into request extensions.
///
/// # Paths that skip authentication
///
/// - `OPTIONS *` (CORS preflight)
/// - anything outside `/api/`
/// - `/api/auth/login`
/// - `/api/health`
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // Allow CORS preflight through
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes fall through to their own handling (usually 404)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    let is_public_api_route = path == "/api/auth/login" || path == "/api/health";
    if is_public_api_route {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

/// Role-rank middleware - requires at least the given role
///
/// Rank comparison follows the hierarchy
/// `Employee < OfficeLead < Registrar < Admin`, so an admin passes every
/// check.
///
/// # Usage
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/api/messages", post(handler::create))
///     .layer(middleware::from_fn(require_rank(Role::OfficeLead)));
/// ```
pub fn require_rank(
    required: Role,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let user = req
                .extensions()
                .get::<CurrentUser>()
                .ok_or(AppError::unauthorized())?;

            if !user.has_rank(required) {
                security_log!(
                    "WARN",
                    "rank_denied",
                    user_id = user.id.clone(),
                    user_role = user.role.to_string(),
                    required_role = required.to_string()
                );
                return Err(AppError::with_message(
                    ErrorCode::RoleRequired,
                    format!("Requires at least role {}", required),
                ));
            }

            Ok(next.run(req).await)
        })
    }
}

/// Admin middleware - requires the HR administrator role
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::unauthorized())?;
    if !user.is_admin() {
        security_log!(
            "WARN",
            "admin_required",
            user_id = user.id.clone(),
            user_role = user.role.to_string()
        );
        return Err(AppError::new(ErrorCode::AdminRequired));
    }

    Ok(next.run(req).await)
}

/// Check self-or-admin access to a user-owned record
///
/// Admins may access anyone's records; everyone else only their own.
pub fn ensure_self_or_admin(user: &CurrentUser, owner_id: &str) -> Result<(), AppError> {
    if user.is_admin() || user.is_self(owner_id) {
        Ok(())
    } else {
        security_log!(
            "WARN",
            "self_access_denied",
            user_id = user.id.clone(),
            owner_id = owner_id.to_string()
        );
        Err(AppError::new(ErrorCode::SelfAccessOnly))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: Role) -> CurrentUser {
        CurrentUser {
            id: "user:abc".to_string(),
            name: "Teszt Elek".to_string(),
            email: "elek@hivatal.hu".to_string(),
            role,
            manager_id: None,
        }
    }

    #[test]
    fn test_self_or_admin() {
        let employee = user_with_role(Role::Employee);
        assert!(ensure_self_or_admin(&employee, "user:abc").is_ok());
        let err = ensure_self_or_admin(&employee, "user:other").unwrap_err();
        assert_eq!(err.code, ErrorCode::SelfAccessOnly);

        let admin = user_with_role(Role::Admin);
        assert!(ensure_self_or_admin(&admin, "user:other").is_ok());
    }
}
