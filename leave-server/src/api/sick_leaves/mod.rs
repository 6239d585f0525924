//! Sick-leave API Module

mod handler;

use axum::{Router, middleware, routing::delete, routing::get, routing::post};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Sick-leave router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sick-leaves", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list_own_recent))
        .route("/current", get(handler::current))
        .route("/{user_id}", get(handler::list_for_user))
        .route("/{user_id}/cumulative", get(handler::cumulative));

    // Periods are recorded by HR, not self-reported
    let manage_routes = Router::new()
        .route("/{user_id}/start", post(handler::start))
        .route("/{user_id}/end", post(handler::end))
        .route("/period/{id}", delete(handler::delete))
        .layer(middleware::from_fn(require_admin));

    read_routes.merge(manage_routes)
}
