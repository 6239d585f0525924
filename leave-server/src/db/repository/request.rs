//! Leave-request Repository (`kerelem` table)
//!
//! Approval and reversal touch both the request row and the user's
//! balance, so they run as single transactions. Guards `THROW` marker
//! strings that [`RepoError::from_db`] maps to precise error codes,
//! which keeps concurrent double-decisions safe: the second decision
//! sees a non-pending state and fails with a conflict.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{LeaveRequest, LeaveRequestCreate, PAID_LEAVE_TYPE};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

/// Page size for request listings
pub const PAGE_SIZE: usize = 25;

#[derive(Clone)]
pub struct RequestRepository {
    base: BaseRepository,
}

impl RequestRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn parse_id(id: &str) -> RepoResult<RecordId> {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))
    }

    /// Find request by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<LeaveRequest>> {
        let thing = Self::parse_id(id)?;
        let req: Option<LeaveRequest> = self.base.db().select(thing).await?;
        Ok(req)
    }

    /// Requests submitted by a user, newest first
    pub async fn find_own(&self, user_id: &str, offset: usize) -> RepoResult<Vec<LeaveRequest>> {
        let user = Self::parse_id(user_id)?;
        let requests: Vec<LeaveRequest> = self
            .base
            .db()
            .query(
                "SELECT * FROM kerelem WHERE user = $user
                 ORDER BY created_at DESC LIMIT $limit START $offset",
            )
            .bind(("user", user))
            .bind(("limit", PAGE_SIZE))
            .bind(("offset", offset))
            .await?
            .take(0)?;
        Ok(requests)
    }

    /// Requests assigned to a manager, newest first
    pub async fn find_by_manager(
        &self,
        manager_id: &str,
        offset: usize,
    ) -> RepoResult<Vec<LeaveRequest>> {
        let manager = Self::parse_id(manager_id)?;
        let requests: Vec<LeaveRequest> = self
            .base
            .db()
            .query(
                "SELECT * FROM kerelem WHERE manager = $manager
                 ORDER BY created_at DESC LIMIT $limit START $offset",
            )
            .bind(("manager", manager))
            .bind(("limit", PAGE_SIZE))
            .bind(("offset", offset))
            .await?
            .take(0)?;
        Ok(requests)
    }

    /// All requests, newest first (admin and registrar views)
    pub async fn find_all(&self, offset: usize) -> RepoResult<Vec<LeaveRequest>> {
        let requests: Vec<LeaveRequest> = self
            .base
            .db()
            .query("SELECT * FROM kerelem ORDER BY created_at DESC LIMIT $limit START $offset")
            .bind(("limit", PAGE_SIZE))
            .bind(("offset", offset))
            .await?
            .take(0)?;
        Ok(requests)
    }

    /// Count of pending requests assigned to a manager
    pub async fn count_pending(&self, manager_id: &str) -> RepoResult<u64> {
        let manager = Self::parse_id(manager_id)?;
        let mut result = self
            .base
            .db()
            .query(
                "SELECT count() AS count FROM kerelem
                 WHERE manager = $manager AND state = 'pending'
                 GROUP ALL",
            )
            .bind(("manager", manager))
            .await?;

        #[derive(serde::Deserialize)]
        struct CountRow {
            count: u64,
        }
        let rows: Vec<CountRow> = result.take(0)?;
        Ok(rows.into_iter().next().map(|r| r.count).unwrap_or(0))
    }

    /// Create a new pending request
    pub async fn create(
        &self,
        user_id: &str,
        manager_id: &str,
        data: LeaveRequestCreate,
    ) -> RepoResult<LeaveRequest> {
        let user = Self::parse_id(user_id)?;
        let manager = Self::parse_id(manager_id)?;

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE kerelem SET
                    user = $user,
                    manager = $manager,
                    dates = $dates,
                    type = $type,
                    note = $note,
                    state = 'pending',
                    created_at = time::now()
                RETURN AFTER"#,
            )
            .bind(("user", user))
            .bind(("manager", manager))
            .bind(("dates", data.dates))
            .bind(("type", data.leave_type))
            .bind(("note", data.note))
            .await?;

        let created: Option<LeaveRequest> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create request".to_string()))
    }

    /// Approve a pending request
    ///
    /// Atomically, in one transaction:
    /// 1. the request must still be pending
    /// 2. paid leave requires enough remaining days, which are deducted
    /// 3. a `szabadsag` row records the approved days
    /// 4. the request flips to `approved`
    ///
    /// Failing any guard rolls everything back.
    pub async fn approve(&self, id: &str) -> RepoResult<LeaveRequest> {
        let thing = Self::parse_id(id)?;

        self.base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $req = (SELECT * FROM $rid)[0];
                IF $req == NONE { THROW "request_not_found" };
                IF $req.state != 'pending' { THROW "already_decided" };
                IF $req.type == $paid_type {
                    LET $u = (SELECT * FROM $req.user)[0];
                    IF $u.remaining_days < array::len($req.dates) { THROW "insufficient_days" };
                    UPDATE $req.user SET remaining_days -= array::len($req.dates);
                };
                CREATE szabadsag SET
                    user = $req.user,
                    manager = $req.manager,
                    dates = $req.dates,
                    type = $req.type,
                    request = $rid,
                    created_at = time::now();
                UPDATE $rid SET state = 'approved', decided_at = time::now();
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("rid", thing.clone()))
            .bind(("paid_type", PAID_LEAVE_TYPE))
            .await
            .map_err(RepoError::from_db)?
            .check()
            .map_err(RepoError::from_db)?;

        let approved: Option<LeaveRequest> = self.base.db().select(thing).await?;
        approved.ok_or_else(|| RepoError::Database("Approved request vanished".to_string()))
    }

    /// Reject a pending request, recording the reason
    pub async fn reject(&self, id: &str, reason: String) -> RepoResult<LeaveRequest> {
        let thing = Self::parse_id(id)?;

        self.base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $req = (SELECT * FROM $rid)[0];
                IF $req == NONE { THROW "request_not_found" };
                IF $req.state != 'pending' { THROW "already_decided" };
                UPDATE $rid SET
                    state = 'rejected',
                    reject_reason = $reason,
                    decided_at = time::now();
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("rid", thing.clone()))
            .bind(("reason", reason))
            .await
            .map_err(RepoError::from_db)?
            .check()
            .map_err(RepoError::from_db)?;

        let rejected: Option<LeaveRequest> = self.base.db().select(thing).await?;
        rejected.ok_or_else(|| RepoError::Database("Rejected request vanished".to_string()))
    }

    /// Delete a request, reverting its effects
    ///
    /// Deleting an approved paid-leave request restores the deducted
    /// days and removes the linked `szabadsag` row, in one transaction.
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let thing = Self::parse_id(id)?;

        self.base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $req = (SELECT * FROM $rid)[0];
                IF $req == NONE { THROW "request_not_found" };
                IF $req.state == 'approved' {
                    IF $req.type == $paid_type {
                        UPDATE $req.user SET remaining_days += array::len($req.dates);
                    };
                    DELETE szabadsag WHERE request = $rid;
                };
                DELETE $rid;
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("rid", thing))
            .bind(("paid_type", PAID_LEAVE_TYPE))
            .await
            .map_err(RepoError::from_db)?
            .check()
            .map_err(RepoError::from_db)?;

        Ok(())
    }
}
