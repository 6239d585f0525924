//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::client::UserInfo;
use shared::{ErrorCode, Role};

use crate::api::convert;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{UserCreate, UserUpdate};
use crate::db::repository::UserRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, validate_email, validate_password, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// List users with live attendance status
///
/// Registrars and HR see everyone; office leads only the users sharing
/// their email domain.
pub async fn list(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<UserInfo>>> {
    let repo = UserRepository::new(state.get_db());

    let users = if current.has_rank(Role::Registrar) {
        repo.find_all().await?
    } else {
        let domain = current
            .email_domain()
            .ok_or_else(|| AppError::validation("user has no email domain"))?;
        repo.find_by_domain(domain).await?
    };

    let mut infos = Vec::with_capacity(users.len());
    for user in &users {
        infos.push(convert::user_info(&state, user).await?);
    }
    Ok(Json(infos))
}

/// Get one user with live attendance status
pub async fn get_by_id(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<UserInfo>> {
    let repo = UserRepository::new(state.get_db());
    let user = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;

    // Office leads stay inside their own office
    if !current.has_rank(Role::Registrar) {
        let same_office = match (current.email_domain(), user.email_domain()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
        if !same_office {
            return Err(AppError::new(ErrorCode::PermissionDenied));
        }
    }

    let info = convert::user_info(&state, &user).await?;
    Ok(Json(info))
}

/// Register a new user account (HR only)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<UserInfo>> {
    let name = validate_required_text("name", &payload.name, MAX_NAME_LEN)?;
    let email = validate_email(&payload.email)?;
    validate_password(&payload.password)?;

    let repo = UserRepository::new(state.get_db());
    let user = repo
        .create(UserCreate {
            name,
            email,
            ..payload
        })
        .await?;

    let info = convert::user_info(&state, &user).await?;
    Ok(Json(info))
}

/// Update a user account (HR only)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(mut payload): Json<UserUpdate>,
) -> AppResult<Json<UserInfo>> {
    if let Some(ref name) = payload.name {
        payload.name = Some(validate_required_text("name", name, MAX_NAME_LEN)?);
    }
    if let Some(ref password) = payload.password {
        validate_password(password)?;
    }

    let repo = UserRepository::new(state.get_db());
    let user = repo.update(&id, payload).await?;

    let info = convert::user_info(&state, &user).await?;
    Ok(Json(info))
}
