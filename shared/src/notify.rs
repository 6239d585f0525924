//! Notification events and push-message payloads
//!
//! Events flow through an in-process queue and are delivered on a
//! best-effort basis: a failed delivery is logged and dropped, it never
//! fails the operation that produced it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An event queued for asynchronous delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A new leave request was submitted and awaits the manager's decision
    RequestSubmitted {
        manager_id: String,
        submitter_name: String,
        dates: Vec<NaiveDate>,
    },
    /// The manager's pending-request count changed
    PendingCount { manager_id: String, count: u64 },
}

/// Message pushed to a connected client session
///
/// The `type` tag keeps the wire format of the previous system so
/// existing clients keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PushMessage {
    /// Pending-request counter update, tagged `"kerelmek"` on the wire
    #[serde(rename = "kerelmek")]
    PendingRequests { count: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_message_wire_format() {
        let msg = PushMessage::PendingRequests { count: 3 };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "kerelmek");
        assert_eq!(json["count"], 3);
    }
}
