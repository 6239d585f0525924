//! Annual-plan API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Annual-plan router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/plans", routes())
}

fn routes() -> Router<ServerState> {
    let user_routes = Router::new()
        .route("/", post(handler::submit))
        .route("/{user_id}", get(handler::get_for_user));

    let admin_routes = Router::new()
        .route("/reset-all", post(handler::reset_all))
        .route("/{user_id}/reset", post(handler::reset))
        .layer(middleware::from_fn(require_admin));

    user_routes.merge(admin_routes)
}
