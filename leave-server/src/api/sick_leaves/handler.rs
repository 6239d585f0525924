//! Sick-leave API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{ErrorCode, Role};

use crate::attendance;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{SickLeave, SickLeaveStart};
use crate::db::repository::SickLeaveRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct SickLeaveEnd {
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct CumulativeDays {
    pub days: i64,
}

fn ensure_readable(current: &CurrentUser, user_id: &str) -> AppResult<()> {
    if current.is_self(user_id) || current.has_rank(Role::OfficeLead) {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::SelfAccessOnly))
    }
}

/// The current user's most recent periods
pub async fn list_own_recent(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<SickLeave>>> {
    let repo = SickLeaveRepository::new(state.get_db());
    let periods = repo.find_recent(&current.id).await?;
    Ok(Json(periods))
}

/// The current user's ongoing period, if any
pub async fn current(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<Option<SickLeave>>> {
    let repo = SickLeaveRepository::new(state.get_db());
    let period = repo.find_ongoing(&current.id).await?;
    Ok(Json(period))
}

/// All periods of a user
pub async fn list_for_user(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<SickLeave>>> {
    ensure_readable(&current, &user_id)?;
    let repo = SickLeaveRepository::new(state.get_db());
    let periods = repo.find_by_user(&user_id).await?;
    Ok(Json(periods))
}

/// Total sick days of a user across closed periods
pub async fn cumulative(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(user_id): Path<String>,
) -> AppResult<Json<CumulativeDays>> {
    ensure_readable(&current, &user_id)?;
    let repo = SickLeaveRepository::new(state.get_db());
    let periods = repo.find_by_user(&user_id).await?;
    Ok(Json(CumulativeDays {
        days: attendance::cumulative_sick_days(&periods),
    }))
}

/// Record the start of a sick-leave period (HR only)
pub async fn start(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
    Json(payload): Json<SickLeaveStart>,
) -> AppResult<Json<SickLeave>> {
    let repo = SickLeaveRepository::new(state.get_db());
    let period = repo.start(&user_id, payload.start_date).await?;
    Ok(Json(period))
}

/// Record the return to work, closing the ongoing period (HR only)
pub async fn end(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
    Json(payload): Json<SickLeaveEnd>,
) -> AppResult<Json<SickLeave>> {
    let repo = SickLeaveRepository::new(state.get_db());

    if let Some(ongoing) = repo.find_ongoing(&user_id).await?
        && payload.end_date < ongoing.start_date
    {
        return Err(AppError::validation("end date precedes the period start"));
    }

    let period = repo.end(&user_id, payload.end_date).await?;
    Ok(Json(period))
}

/// Delete a recorded period (HR only)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = SickLeaveRepository::new(state.get_db());
    let deleted = repo.delete(&id).await?;
    Ok(Json(deleted))
}
