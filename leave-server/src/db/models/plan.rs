//! Annual plan model (`terv` table)
//!
//! Every user has at most one plan row, enforced by a unique index on
//! `user`. A submitted plan must use the yearly allotment exactly, and
//! once `filled_out` flips it stays set until the January bulk reset.

use super::serde_helpers;
use super::user::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Annual leave plan matching the `terv` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub user: UserId,
    /// Planned calendar days
    #[serde(default)]
    pub dates: Vec<NaiveDate>,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub filled_out: bool,
    pub created_at: DateTime<Utc>,
}

/// Submit plan payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSubmit {
    pub dates: Vec<NaiveDate>,
}
