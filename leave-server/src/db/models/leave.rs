//! Approved leave model (`szabadsag` table)
//!
//! One row per approved request. The row carries the days taken, so
//! deleting it (when an approval is reverted) restores the balance by
//! the same count.

use super::serde_helpers;
use super::user::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Approved leave matching the `szabadsag` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leave {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub user: UserId,
    /// The manager who approved the request
    #[serde(with = "serde_helpers::record_id")]
    pub manager: UserId,
    /// The approved calendar days
    pub dates: Vec<NaiveDate>,
    /// Leave-type code carried over from the request
    #[serde(rename = "type")]
    pub leave_type: String,
    /// The request this leave was created from
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub request: Option<RecordId>,
    pub created_at: DateTime<Utc>,
}

impl Leave {
    /// Whether any of the leave days falls on `day`
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.dates.contains(&day)
    }
}
