//! Annual-plan API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::ErrorCode;

use crate::auth::CurrentUser;
use crate::auth::middleware::ensure_self_or_admin;
use crate::core::ServerState;
use crate::db::models::{Plan, PlanSubmit};
use crate::db::repository::{PlanRepository, UserRepository};
use crate::plans;
use crate::utils::{AppError, AppResult, time};

#[derive(Debug, Serialize)]
pub struct ResetSummary {
    pub reset: u64,
}

/// A user's plan, created empty on first read
///
/// Visible to the user themselves and HR.
pub async fn get_for_user(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(user_id): Path<String>,
) -> AppResult<Json<Plan>> {
    ensure_self_or_admin(&current, &user_id)?;

    let repo = PlanRepository::new(state.get_db());
    let plan = repo.get_or_create(&user_id).await?;
    Ok(Json(plan))
}

/// Submit the current user's plan
///
/// The submitted days must use the yearly allotment exactly; each
/// failure mode carries its own error code.
pub async fn submit(
    State(state): State<ServerState>,
    current: CurrentUser,
    Json(payload): Json<PlanSubmit>,
) -> AppResult<Json<Plan>> {
    let users = UserRepository::new(state.get_db());
    let user = users
        .find_by_id(&current.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;

    let dates = plans::validate_submission(&payload.dates, user.max_days)?;

    let repo = PlanRepository::new(state.get_db());
    // Make sure the row exists before the guarded submit
    repo.get_or_create(&current.id).await?;
    let plan = repo.submit(&current.id, dates).await?;
    Ok(Json(plan))
}

/// Reset every plan for the new year (HR only, January only)
pub async fn reset_all(State(state): State<ServerState>) -> AppResult<Json<ResetSummary>> {
    let repo = PlanRepository::new(state.get_db());
    let reset = repo.reset_all(time::today()).await?;
    tracing::info!(reset, "Annual plans reset");
    Ok(Json(ResetSummary { reset }))
}

/// Reset a single user's plan (HR only)
pub async fn reset(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Plan>> {
    let repo = PlanRepository::new(state.get_db());
    let plan = repo.reset(&user_id).await?;
    Ok(Json(plan))
}
