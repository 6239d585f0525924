//! Notice model (`uzenet` table)
//!
//! A one-way notice to a single user: no read state, no replies.

use super::serde_helpers;
use super::user::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Notice matching the `uzenet` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Recipient
    #[serde(with = "serde_helpers::record_id")]
    pub user: UserId,
    /// Display name of the sender at the time of sending
    pub sender_name: String,
    /// The day the notice refers to
    pub date: NaiveDate,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Send notice payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCreate {
    /// Recipient user ID
    pub user_id: String,
    pub date: NaiveDate,
    pub content: String,
}
