//! Notice API Handlers

use axum::{Json, extract::State};
use shared::ErrorCode;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Message, MessageCreate};
use crate::db::repository::{MessageRepository, UserRepository};
use crate::utils::validation::{MAX_NOTE_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// The current user's notices, newest first
pub async fn list(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<Message>>> {
    let repo = MessageRepository::new(state.get_db());
    let messages = repo.find_for_user(&current.id).await?;
    Ok(Json(messages))
}

/// Send a notice to a user
pub async fn create(
    State(state): State<ServerState>,
    current: CurrentUser,
    Json(payload): Json<MessageCreate>,
) -> AppResult<Json<Message>> {
    let content = validate_required_text("content", &payload.content, MAX_NOTE_LEN)?;

    let users = UserRepository::new(state.get_db());
    if users.find_by_id(&payload.user_id).await?.is_none() {
        return Err(AppError::new(ErrorCode::UserNotFound));
    }

    let repo = MessageRepository::new(state.get_db());
    let message = repo
        .create(&payload.user_id, current.name.clone(), payload.date, content)
        .await?;
    Ok(Json(message))
}
