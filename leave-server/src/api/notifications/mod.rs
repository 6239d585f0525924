//! Server-push API Module
//!
//! Clients open one SSE stream per session to receive push messages
//! such as pending-request counter updates. Opening a new stream
//! supersedes the previous session of the same user.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Notification-stream router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/notifications/stream", get(handler::stream))
}
