//! Sick-leave Repository (`tappenz` table)
//!
//! Starting a period runs in a transaction guarded against a second
//! ongoing period for the same user.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::SickLeave;
use chrono::NaiveDate;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

/// How many recent periods the overview endpoint returns
pub const RECENT_LIMIT: usize = 5;

#[derive(Clone)]
pub struct SickLeaveRepository {
    base: BaseRepository,
}

impl SickLeaveRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn parse_id(id: &str) -> RepoResult<RecordId> {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))
    }

    /// All periods of a user, newest first
    pub async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<SickLeave>> {
        let user = Self::parse_id(user_id)?;
        let periods: Vec<SickLeave> = self
            .base
            .db()
            .query("SELECT * FROM tappenz WHERE user = $user ORDER BY start_date DESC")
            .bind(("user", user))
            .await?
            .take(0)?;
        Ok(periods)
    }

    /// The most recent periods of a user
    pub async fn find_recent(&self, user_id: &str) -> RepoResult<Vec<SickLeave>> {
        let user = Self::parse_id(user_id)?;
        let periods: Vec<SickLeave> = self
            .base
            .db()
            .query(
                "SELECT * FROM tappenz WHERE user = $user
                 ORDER BY start_date DESC LIMIT $limit",
            )
            .bind(("user", user))
            .bind(("limit", RECENT_LIMIT))
            .await?
            .take(0)?;
        Ok(periods)
    }

    /// The ongoing period of a user, if any
    pub async fn find_ongoing(&self, user_id: &str) -> RepoResult<Option<SickLeave>> {
        let user = Self::parse_id(user_id)?;
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM tappenz WHERE user = $user AND end_date = NONE LIMIT 1")
            .bind(("user", user))
            .await?;
        let periods: Vec<SickLeave> = result.take(0)?;
        Ok(periods.into_iter().next())
    }

    /// Start a new period
    ///
    /// Fails with an ongoing-period conflict when the user already has
    /// an open one.
    pub async fn start(&self, user_id: &str, start_date: NaiveDate) -> RepoResult<SickLeave> {
        let user = Self::parse_id(user_id)?;

        self.base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $open = (SELECT * FROM tappenz WHERE user = $user AND end_date = NONE);
                IF array::len($open) > 0 { THROW "ongoing_exists" };
                CREATE tappenz SET
                    user = $user,
                    start_date = $start_date,
                    created_at = time::now();
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("user", user.clone()))
            .bind(("start_date", start_date))
            .await
            .map_err(RepoError::from_db)?
            .check()
            .map_err(RepoError::from_db)?;

        self.find_ongoing(user_id)
            .await?
            .ok_or_else(|| RepoError::Database("Started period vanished".to_string()))
    }

    /// Close the ongoing period of a user
    ///
    /// `end_date` is the day the user returns to work; that day is no
    /// longer sick.
    pub async fn end(&self, user_id: &str, end_date: NaiveDate) -> RepoResult<SickLeave> {
        let user = Self::parse_id(user_id)?;

        self.base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $open = (SELECT * FROM tappenz WHERE user = $user AND end_date = NONE);
                IF array::len($open) == 0 { THROW "no_ongoing" };
                UPDATE $open[0].id SET end_date = $end_date;
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("user", user))
            .bind(("end_date", end_date))
            .await
            .map_err(RepoError::from_db)?
            .check()
            .map_err(RepoError::from_db)?;

        let closed = self.find_recent(user_id).await?;
        closed
            .into_iter()
            .find(|p| p.end_date == Some(end_date))
            .ok_or_else(|| RepoError::Database("Closed period vanished".to_string()))
    }

    /// Delete a period
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = Self::parse_id(id)?;
        let existing: Option<SickLeave> = self.base.db().select(thing.clone()).await?;
        if existing.is_none() {
            return Err(RepoError::App(shared::AppError::new(
                shared::ErrorCode::SickLeaveNotFound,
            )));
        }
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
