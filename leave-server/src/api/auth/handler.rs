//! Auth API Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use shared::client::{LoginRequest, LoginResponse, UserInfo};

use crate::api::convert;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Minimum time a failed login takes, masking whether the email exists
const FAILED_LOGIN_DELAY: Duration = Duration::from_millis(300);

/// Log in with email and password
///
/// Every failure path returns the same invalid-credentials error after
/// the same delay, so responses leak nothing about which part was
/// wrong.
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = UserRepository::new(state.get_db());
    let user = repo.find_by_email(&payload.email).await?;

    let verified = match &user {
        Some(user) => user.verify_password(&payload.password).unwrap_or(false),
        None => false,
    };

    let Some(user) = user.filter(|_| verified) else {
        security_log!("WARN", "login_failed", email = payload.email.clone());
        tokio::time::sleep(FAILED_LOGIN_DELAY).await;
        return Err(AppError::invalid_credentials());
    };

    let user_id = user.id_string();
    let token = state
        .jwt_service
        .generate_token(
            &user_id,
            &user.name,
            &user.email,
            user.role,
            user.manager.as_ref().map(|m| m.to_string()).as_deref(),
        )
        .map_err(|e| AppError::internal(format!("Token generation failed: {}", e)))?;

    security_log!("INFO", "login_success", user_id = user_id.clone());

    let info = convert::user_info(&state, &user).await?;
    Ok(Json(LoginResponse { token, user: info }))
}

/// Current session's user, with live attendance status
pub async fn me(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<UserInfo>> {
    let repo = UserRepository::new(state.get_db());
    let user = repo
        .find_by_id(&current.id)
        .await?
        .ok_or_else(|| AppError::new(shared::ErrorCode::UserNotFound))?;

    let info = convert::user_info(&state, &user).await?;
    Ok(Json(info))
}
