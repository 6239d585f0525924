//! Approved-leave Repository (`szabadsag` table)
//!
//! Rows are written by request approval and removed by reversal; this
//! repository only reads them.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Leave;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct LeaveRepository {
    base: BaseRepository,
}

impl LeaveRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All leave rows of a user, newest first
    pub async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<Leave>> {
        let user: RecordId = user_id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", user_id)))?;
        let leaves: Vec<Leave> = self
            .base
            .db()
            .query("SELECT * FROM szabadsag WHERE user = $user ORDER BY created_at DESC")
            .bind(("user", user))
            .await?
            .take(0)?;
        Ok(leaves)
    }

    /// Leave rows of a user covering a given day
    pub async fn find_covering(
        &self,
        user_id: &str,
        day: chrono::NaiveDate,
    ) -> RepoResult<Vec<Leave>> {
        let user: RecordId = user_id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", user_id)))?;
        let leaves: Vec<Leave> = self
            .base
            .db()
            .query("SELECT * FROM szabadsag WHERE user = $user AND $day IN dates")
            .bind(("user", user))
            .bind(("day", day))
            .await?
            .take(0)?;
        Ok(leaves)
    }
}
