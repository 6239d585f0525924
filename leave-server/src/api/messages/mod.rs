//! Notice API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post};
use shared::Role;

use crate::auth::require_rank;
use crate::core::ServerState;

/// Notice router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/messages", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new().route("/", get(handler::list));

    // Sending notices is for office leads and above
    let send_routes = Router::new()
        .route("/", post(handler::create))
        .layer(middleware::from_fn(require_rank(Role::OfficeLead)));

    read_routes.merge(send_routes)
}
