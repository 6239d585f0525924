//! Leave request model (`kerelem` table)

use super::serde_helpers;
use super::user::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Leave-type code whose approval deducts from the paid-leave balance.
/// All other codes (unpaid, study leave, etc.) pass through the same
/// lifecycle without touching the balance.
pub const PAID_LEAVE_TYPE: &str = "SZ";

/// Lifecycle state of a leave request
///
/// `Pending` is the only non-terminal state; a decided request never
/// changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestState {
    Pending,
    Approved,
    Rejected,
}

impl RequestState {
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Leave request matching the `kerelem` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Submitter
    #[serde(with = "serde_helpers::record_id")]
    pub user: UserId,
    /// The manager who must decide this request
    #[serde(with = "serde_helpers::record_id")]
    pub manager: UserId,
    /// Requested calendar days
    pub dates: Vec<NaiveDate>,
    /// Leave-type code (`SZ` for paid leave)
    #[serde(rename = "type")]
    pub leave_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub state: RequestState,
    /// Reason recorded when a request is rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
}

impl LeaveRequest {
    /// Whether approving this request deducts from the paid-leave balance
    pub fn deducts_balance(&self) -> bool {
        self.leave_type == PAID_LEAVE_TYPE
    }

    /// String form of the record ID
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }
}

/// Create leave-request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestCreate {
    pub dates: Vec<NaiveDate>,
    #[serde(rename = "type")]
    pub leave_type: String,
    #[serde(default)]
    pub note: Option<String>,
    /// Manager the client believes will decide; must match the
    /// submitter's assigned manager when present
    #[serde(default, skip_serializing)]
    pub manager_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_terminality() {
        assert!(!RequestState::Pending.is_decided());
        assert!(RequestState::Approved.is_decided());
        assert!(RequestState::Rejected.is_decided());
    }

    #[test]
    fn test_type_field_wire_name() {
        let json = r#"{"dates":["2026-03-15"],"type":"SZ"}"#;
        let create: LeaveRequestCreate = serde_json::from_str(json).unwrap();
        assert_eq!(create.leave_type, PAID_LEAVE_TYPE);
        assert_eq!(create.dates.len(), 1);
        assert!(create.note.is_none());
        assert!(create.manager_id.is_none());
    }
}
