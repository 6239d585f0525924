//! API routing
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`auth`] - login and session info
//! - [`users`] - account management
//! - [`requests`] - leave-request lifecycle
//! - [`leaves`] - approved leave listings
//! - [`sick_leaves`] - sick-leave tracking
//! - [`plans`] - annual leave plans
//! - [`messages`] - one-way notices
//! - [`notifications`] - server push stream

pub mod convert;

pub mod auth;
pub mod health;
pub mod leaves;
pub mod messages;
pub mod notifications;
pub mod plans;
pub mod requests;
pub mod sick_leaves;
pub mod users;

use axum::{Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

/// Assemble the full application router
pub fn create_router(state: ServerState) -> Router {
    let cors = if state.config.cors_origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        match state.config.cors_origin.parse() {
            Ok(origin) => CorsLayer::new()
                .allow_origin([origin])
                .allow_methods(Any)
                .allow_headers(Any),
            Err(_) => {
                tracing::warn!(
                    origin = %state.config.cors_origin,
                    "Invalid CORS_ORIGIN, falling back to any"
                );
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
        }
    };

    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(users::router())
        .merge(requests::router())
        .merge(leaves::router())
        .merge(sick_leaves::router())
        .merge(plans::router())
        .merge(messages::router())
        .merge(notifications::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
