//! Server-push API Handlers

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;

use crate::auth::CurrentUser;
use crate::core::ServerState;

/// Open the push stream for the current user
///
/// Each pushed message becomes one SSE event with a JSON body. The
/// stream ends when the client disconnects or a newer session takes
/// over the registration.
pub async fn stream(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.notify.sessions().register(&current.id);
    tracing::debug!(user_id = %current.id, "Push stream opened");

    let stream = futures::stream::unfold(rx, |mut rx| async move {
        let message = rx.recv().await?;
        let event = Event::default().json_data(&message).ok()?;
        Some((Ok::<_, Infallible>(event), rx))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
