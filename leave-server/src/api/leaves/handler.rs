//! Approved-leave API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::{ErrorCode, Role};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::Leave;
use crate::db::repository::LeaveRepository;
use crate::utils::{AppError, AppResult};

/// The current user's approved leave
pub async fn list_own(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<Leave>>> {
    let repo = LeaveRepository::new(state.get_db());
    let leaves = repo.find_by_user(&current.id).await?;
    Ok(Json(leaves))
}

/// Approved leave of another user
///
/// Open to the user themselves and anyone with office-lead rank or
/// above.
pub async fn list_for_user(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<Leave>>> {
    if !current.is_self(&user_id) && !current.has_rank(Role::OfficeLead) {
        return Err(AppError::new(ErrorCode::SelfAccessOnly));
    }

    let repo = LeaveRepository::new(state.get_db());
    let leaves = repo.find_by_user(&user_id).await?;
    Ok(Json(leaves))
}
