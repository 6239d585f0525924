//! Approved-leave API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Approved-leave router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/leaves", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_own))
        .route("/{user_id}", get(handler::list_for_user))
}
