//! Notification service
//!
//! Fire-and-forget delivery of domain events. Handlers publish into an
//! unbounded queue and return immediately; a background worker fans the
//! events out to connected sessions and, when the manager is away, to
//! email. Delivery failures are logged, never surfaced to the caller.

pub mod sessions;

pub use sessions::SessionRegistry;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{Notification, PushMessage};
use tokio::sync::{Mutex, mpsc};

use crate::core::ServerState;
use crate::db::repository::{LeaveRepository, RequestRepository, UserRepository};
use crate::utils::time;

/// Outgoing email dispatch
///
/// The default implementation only logs; a real SMTP transport plugs in
/// behind this trait.
#[async_trait]
pub trait MailDispatch: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()>;
}

/// Mailer that writes outgoing mail to the log
pub struct LogMailer;

#[async_trait]
impl MailDispatch for LogMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        tracing::info!(to = %to, subject = %subject, body = %body, "Outgoing mail");
        Ok(())
    }
}

/// Notification queue and session registry
#[derive(Clone)]
pub struct NotifyService {
    tx: mpsc::UnboundedSender<Notification>,
    rx: Arc<Mutex<Option<mpsc::UnboundedReceiver<Notification>>>>,
    sessions: Arc<SessionRegistry>,
    mailer: Arc<dyn MailDispatch>,
}

impl fmt::Debug for NotifyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifyService")
            .field("sessions", &self.sessions.len())
            .finish()
    }
}

impl NotifyService {
    pub fn new() -> Self {
        Self::with_mailer(Arc::new(LogMailer))
    }

    pub fn with_mailer(mailer: Arc<dyn MailDispatch>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Arc::new(Mutex::new(Some(rx))),
            sessions: Arc::new(SessionRegistry::new()),
            mailer,
        }
    }

    /// Connected client sessions
    pub fn sessions(&self) -> &Arc<SessionRegistry> {
        &self.sessions
    }

    /// Queue a notification, without waiting for delivery
    pub fn publish(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            tracing::warn!("Notification worker gone, event dropped");
        }
    }

    /// Start the dispatch worker
    ///
    /// Call once before serving requests; later calls are no-ops.
    pub fn start_background_tasks(&self, state: ServerState) {
        let rx = self.rx.clone();
        let sessions = self.sessions.clone();
        let mailer = self.mailer.clone();

        tokio::spawn(async move {
            let Some(mut rx) = rx.lock().await.take() else {
                return;
            };
            tracing::info!("Notification worker started");

            while let Some(event) = rx.recv().await {
                dispatch(&state, &sessions, mailer.as_ref(), event).await;
            }
        });
    }
}

impl Default for NotifyService {
    fn default() -> Self {
        Self::new()
    }
}

async fn dispatch(
    state: &ServerState,
    sessions: &SessionRegistry,
    mailer: &dyn MailDispatch,
    event: Notification,
) {
    match event {
        Notification::PendingCount { manager_id, count } => {
            sessions.push(&manager_id, PushMessage::PendingRequests { count });
        }
        Notification::RequestSubmitted {
            manager_id,
            submitter_name,
            dates,
        } => {
            // Refresh the manager's pending counter
            let requests = RequestRepository::new(state.get_db());
            match requests.count_pending(&manager_id).await {
                Ok(count) => {
                    sessions.push(&manager_id, PushMessage::PendingRequests { count });
                }
                Err(e) => tracing::warn!(error = %e, "Pending count refresh failed"),
            }

            // A manager on leave gets the request by email too
            if let Err(e) = mail_if_away(state, mailer, &manager_id, &submitter_name, &dates).await
            {
                tracing::warn!(error = %e, manager = %manager_id, "Mail dispatch failed");
            }
        }
    }
}

async fn mail_if_away(
    state: &ServerState,
    mailer: &dyn MailDispatch,
    manager_id: &str,
    submitter_name: &str,
    dates: &[NaiveDate],
) -> anyhow::Result<()> {
    let users = UserRepository::new(state.get_db());
    let Some(manager) = users.find_by_id(manager_id).await? else {
        anyhow::bail!("manager {} not found", manager_id);
    };

    let leaves = LeaveRepository::new(state.get_db());
    let today = time::today();
    let on_leave = !leaves.find_covering(manager_id, today).await?.is_empty();
    if !on_leave {
        return Ok(());
    }

    let days: Vec<String> = dates.iter().map(|d| d.to_string()).collect();
    mailer
        .send(
            &manager.email,
            "New leave request awaits your decision",
            &format!(
                "{} submitted a leave request for: {}",
                submitter_name,
                days.join(", ")
            ),
        )
        .await
}
