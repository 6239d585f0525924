//! Leave-request API Handlers
//!
//! The request lifecycle: `pending` until the assigned manager approves
//! or rejects, both terminal. Paid-leave approval deducts the balance
//! atomically in the repository.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use shared::{ErrorCode, Notification, Role};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{LeaveRequest, LeaveRequestCreate};
use crate::db::repository::{RequestRepository, request::PAGE_SIZE};
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub offset: usize,
}

#[derive(Debug, Serialize)]
pub struct RequestPage {
    pub requests: Vec<LeaveRequest>,
    pub offset: usize,
    pub page_size: usize,
}

#[derive(Debug, Deserialize)]
pub struct RejectBody {
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PendingCount {
    pub count: u64,
}

/// Submit a new leave request
///
/// The request always goes to the submitter's assigned manager; a
/// client-supplied manager that differs is rejected.
pub async fn create(
    State(state): State<ServerState>,
    current: CurrentUser,
    Json(mut payload): Json<LeaveRequestCreate>,
) -> AppResult<Json<LeaveRequest>> {
    if payload.dates.is_empty() {
        return Err(AppError::required_field("dates"));
    }
    payload.dates.sort();
    payload.dates.dedup();
    payload.leave_type = validate_required_text("type", &payload.leave_type, 16)?;
    payload.note = validate_optional_text("note", payload.note.as_deref(), MAX_NOTE_LEN)?;

    let manager_id = current
        .manager_id
        .clone()
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::ManagerMismatch, "No assigned manager")
        })?;

    if let Some(ref claimed) = payload.manager_id
        && claimed != &manager_id
    {
        return Err(AppError::new(ErrorCode::ManagerMismatch));
    }

    let repo = RequestRepository::new(state.get_db());
    let request = repo.create(&current.id, &manager_id, payload).await?;

    // Delivery is best-effort, the submission already succeeded
    state.notify.publish(Notification::RequestSubmitted {
        manager_id,
        submitter_name: current.name.clone(),
        dates: request.dates.clone(),
    });

    Ok(Json(request))
}

/// Requests for the current user to decide
///
/// Registrars and HR see every request, everyone else the ones assigned
/// to them as manager.
pub async fn list(
    State(state): State<ServerState>,
    current: CurrentUser,
    Query(page): Query<Pagination>,
) -> AppResult<Json<RequestPage>> {
    let repo = RequestRepository::new(state.get_db());
    let requests = if current.has_rank(Role::Registrar) {
        repo.find_all(page.offset).await?
    } else {
        repo.find_by_manager(&current.id, page.offset).await?
    };
    Ok(Json(RequestPage {
        requests,
        offset: page.offset,
        page_size: PAGE_SIZE,
    }))
}

/// The current user's own submissions
pub async fn list_own(
    State(state): State<ServerState>,
    current: CurrentUser,
    Query(page): Query<Pagination>,
) -> AppResult<Json<RequestPage>> {
    let repo = RequestRepository::new(state.get_db());
    let requests = repo.find_own(&current.id, page.offset).await?;
    Ok(Json(RequestPage {
        requests,
        offset: page.offset,
        page_size: PAGE_SIZE,
    }))
}

/// Count of requests waiting for the current user's decision
pub async fn pending_count(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<PendingCount>> {
    let repo = RequestRepository::new(state.get_db());
    let count = repo.count_pending(&current.id).await?;
    Ok(Json(PendingCount { count }))
}

/// Get one request
///
/// Visible to its submitter, its assigned manager, registrars and HR.
pub async fn get_by_id(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<LeaveRequest>> {
    let repo = RequestRepository::new(state.get_db());
    let request = fetch_visible(&repo, &current, &id).await?;
    Ok(Json(request))
}

/// Approve a pending request (assigned manager or HR)
pub async fn approve(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<LeaveRequest>> {
    let repo = RequestRepository::new(state.get_db());
    let request = ensure_decider(&repo, &current, &id).await?;

    let approved = repo.approve(&id).await?;
    refresh_pending(&state, &request);
    Ok(Json(approved))
}

/// Reject a pending request with a reason (assigned manager or HR)
pub async fn reject(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<String>,
    Json(body): Json<RejectBody>,
) -> AppResult<Json<LeaveRequest>> {
    let reason = body
        .reason
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .ok_or_else(|| AppError::new(ErrorCode::ReasonRequired))?;

    let repo = RequestRepository::new(state.get_db());
    let request = ensure_decider(&repo, &current, &id).await?;

    let rejected = repo.reject(&id, reason.to_string()).await?;
    refresh_pending(&state, &request);
    Ok(Json(rejected))
}

/// Delete a request, reverting an approval's effects
///
/// Submitters may withdraw their own pending requests; HR may delete
/// any request, which restores deducted days.
pub async fn delete(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = RequestRepository::new(state.get_db());
    let request = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RequestNotFound))?;

    if !current.is_admin() {
        if !current.is_self(&request.user.to_string()) {
            return Err(AppError::new(ErrorCode::SelfAccessOnly));
        }
        if request.state.is_decided() {
            return Err(AppError::new(ErrorCode::RequestAlreadyDecided));
        }
    }

    repo.delete(&id).await?;
    refresh_pending(&state, &request);
    Ok(Json(true))
}

async fn fetch_visible(
    repo: &RequestRepository,
    current: &CurrentUser,
    id: &str,
) -> AppResult<LeaveRequest> {
    let request = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RequestNotFound))?;

    let involved = current.is_self(&request.user.to_string())
        || current.is_self(&request.manager.to_string());
    if !involved && !current.has_rank(Role::Registrar) {
        return Err(AppError::new(ErrorCode::SelfAccessOnly));
    }
    Ok(request)
}

/// A decision is reserved for the assigned manager and HR
async fn ensure_decider(
    repo: &RequestRepository,
    current: &CurrentUser,
    id: &str,
) -> AppResult<LeaveRequest> {
    let request = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RequestNotFound))?;

    if !current.is_admin() && !current.is_self(&request.manager.to_string()) {
        return Err(AppError::new(ErrorCode::ManagerMismatch));
    }
    Ok(request)
}

/// Push the manager's fresh pending count, fire and forget
fn refresh_pending(state: &ServerState, request: &LeaveRequest) {
    let manager_id = request.manager.to_string();
    let state = state.clone();
    tokio::spawn(async move {
        let repo = RequestRepository::new(state.get_db());
        match repo.count_pending(&manager_id).await {
            Ok(count) => state
                .notify
                .publish(Notification::PendingCount { manager_id, count }),
            Err(e) => tracing::warn!(error = %e, "Pending count refresh failed"),
        }
    });
}
