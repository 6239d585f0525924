//! Sick-leave model (`tappenz` table)
//!
//! A period is ongoing while `end_date` is unset. Each user has at most
//! one ongoing period at a time.

use super::serde_helpers;
use super::user::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Sick-leave period matching the `tappenz` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SickLeave {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub user: UserId,
    /// First day of the period
    pub start_date: NaiveDate,
    /// Day the user returned to work; unset while the period is ongoing.
    /// The end day itself is a working day, the period covers
    /// `[start_date, end_date)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl SickLeave {
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }

    /// String form of the record ID
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }
}

/// Start sick-leave payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SickLeaveStart {
    pub start_date: NaiveDate,
}
