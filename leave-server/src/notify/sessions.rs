//! Connected client sessions
//!
//! Tracks one push channel per user. Registering a new session for a
//! user supersedes the previous one, so a reconnecting client never
//! leaves a stale channel behind.

use dashmap::DashMap;
use shared::PushMessage;
use tokio::sync::mpsc;

/// Registry of connected user sessions
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<String, mpsc::UnboundedSender<PushMessage>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Register a session for a user, superseding any existing one
    pub fn register(&self, user_id: &str) -> mpsc::UnboundedReceiver<PushMessage> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.sessions.insert(user_id.to_string(), tx);
        rx
    }

    /// Remove a user's session
    pub fn unregister(&self, user_id: &str) {
        self.sessions.remove(user_id);
    }

    /// Push a message to a user's session, if connected
    ///
    /// Returns whether the message was delivered. A closed channel is
    /// cleaned up on the spot.
    pub fn push(&self, user_id: &str, message: PushMessage) -> bool {
        let delivered = match self.sessions.get(user_id) {
            Some(tx) => tx.send(message).is_ok(),
            None => false,
        };
        if !delivered {
            self.sessions.remove(user_id);
        }
        delivered
    }

    /// Number of connected sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_push_to_registered_session() {
        let registry = SessionRegistry::new();
        let mut rx = registry.register("user:abc");

        assert!(registry.push("user:abc", PushMessage::PendingRequests { count: 2 }));
        assert_eq!(rx.recv().await, Some(PushMessage::PendingRequests { count: 2 }));
    }

    #[tokio::test]
    async fn test_push_to_unknown_user() {
        let registry = SessionRegistry::new();
        assert!(!registry.push("user:ghost", PushMessage::PendingRequests { count: 1 }));
    }

    #[tokio::test]
    async fn test_reconnect_supersedes() {
        let registry = SessionRegistry::new();
        let mut old_rx = registry.register("user:abc");
        let mut new_rx = registry.register("user:abc");

        assert!(registry.push("user:abc", PushMessage::PendingRequests { count: 5 }));
        assert_eq!(
            new_rx.recv().await,
            Some(PushMessage::PendingRequests { count: 5 })
        );
        // the superseded channel was dropped with the insert
        assert_eq!(old_rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_unregister() {
        let registry = SessionRegistry::new();
        let _rx = registry.register("user:abc");
        registry.unregister("user:abc");
        assert!(registry.is_empty());
    }
}
