//! Conversions between database models and API DTOs

use shared::AppResult;
use shared::client::UserInfo;

use crate::attendance;
use crate::core::ServerState;
use crate::db::models::User;
use crate::db::repository::{LeaveRepository, SickLeaveRepository};
use crate::utils::time;

/// Build the public view of a user
///
/// `sick` and `on_leave` are computed for today from the attendance
/// records, they are never stored.
pub async fn user_info(state: &ServerState, user: &User) -> AppResult<UserInfo> {
    let user_id = user.id_string();
    let today = time::today();

    let sick_repo = SickLeaveRepository::new(state.get_db());
    let sick = match sick_repo.find_ongoing(&user_id).await? {
        Some(period) => attendance::is_sick(today, &period),
        None => false,
    };

    let leave_repo = LeaveRepository::new(state.get_db());
    let on_leave = !leave_repo.find_covering(&user_id, today).await?.is_empty();

    Ok(UserInfo {
        id: user_id,
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role,
        manager_id: user.manager.as_ref().map(|m| m.to_string()),
        max_days: user.max_days,
        remaining_days: user.remaining_days,
        sick,
        on_leave,
    })
}
