//! Leave-request API Module

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Leave-request router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/requests", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/own", get(handler::list_own))
        .route("/pending-count", get(handler::pending_count))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        .route("/{id}/approve", post(handler::approve))
        .route("/{id}/reject", post(handler::reject))
}
