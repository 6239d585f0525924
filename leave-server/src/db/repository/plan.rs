//! Annual-plan Repository (`terv` table)
//!
//! One row per user, backed by a unique index. Submission is guarded in
//! a transaction so a plan cannot be filled out twice; the bulk reset
//! is restricted to January.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Plan;
use crate::plans;
use chrono::NaiveDate;
use shared::{AppError, ErrorCode};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct PlanRepository {
    base: BaseRepository,
}

impl PlanRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn parse_id(id: &str) -> RepoResult<RecordId> {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))
    }

    /// The plan row of a user, if any
    pub async fn find_by_user(&self, user_id: &str) -> RepoResult<Option<Plan>> {
        let user = Self::parse_id(user_id)?;
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM terv WHERE user = $user LIMIT 1")
            .bind(("user", user))
            .await?;
        let plans: Vec<Plan> = result.take(0)?;
        Ok(plans.into_iter().next())
    }

    /// The plan row of a user, creating an empty one when missing
    ///
    /// The unique index on `user` absorbs a concurrent double-create:
    /// the loser re-reads the row the winner made.
    pub async fn get_or_create(&self, user_id: &str) -> RepoResult<Plan> {
        if let Some(plan) = self.find_by_user(user_id).await? {
            return Ok(plan);
        }

        let user = Self::parse_id(user_id)?;
        let create = self
            .base
            .db()
            .query(
                r#"CREATE terv SET
                    user = $user,
                    dates = [],
                    filled_out = false,
                    created_at = time::now()
                RETURN AFTER"#,
            )
            .bind(("user", user))
            .await;

        match create {
            Ok(mut result) => {
                let created: Option<Plan> = result.take(0)?;
                created.ok_or_else(|| RepoError::Database("Failed to create plan".to_string()))
            }
            // Lost the race against another create, the row exists now
            Err(_) => self
                .find_by_user(user_id)
                .await?
                .ok_or_else(|| RepoError::Database("Plan create race left no row".to_string())),
        }
    }

    /// Submit a plan's days, flipping `filled_out`
    ///
    /// The day-count validation happens before this call; the
    /// transaction only guards the filled-out flag.
    pub async fn submit(&self, user_id: &str, dates: Vec<NaiveDate>) -> RepoResult<Plan> {
        let user = Self::parse_id(user_id)?;

        self.base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $plan = (SELECT * FROM terv WHERE user = $user)[0];
                IF $plan == NONE { THROW "plan_not_found" };
                IF $plan.filled_out { THROW "plan_filled_out" };
                UPDATE $plan.id SET dates = $dates, filled_out = true;
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("user", user))
            .bind(("dates", dates))
            .await
            .map_err(RepoError::from_db)?
            .check()
            .map_err(RepoError::from_db)?;

        self.find_by_user(user_id)
            .await?
            .ok_or_else(|| RepoError::Database("Submitted plan vanished".to_string()))
    }

    /// Reset a single user's plan (admin correction)
    ///
    /// Creates the row when the user never opened their plan, so the
    /// result is always an empty, un-filled plan.
    pub async fn reset(&self, user_id: &str) -> RepoResult<Plan> {
        let plan = self.get_or_create(user_id).await?;
        let Some(plan_id) = plan.id else {
            return Err(RepoError::Database("Plan row without ID".to_string()));
        };

        let mut result = self
            .base
            .db()
            .query("UPDATE $plan SET dates = [], filled_out = false RETURN AFTER")
            .bind(("plan", plan_id))
            .await?;
        result
            .take::<Option<Plan>>(0)?
            .ok_or_else(|| RepoError::Database("Reset plan vanished".to_string()))
    }

    /// Reset every plan for the new year
    ///
    /// Only valid while `today` falls in January; outside the window the
    /// call fails regardless of who asks.
    pub async fn reset_all(&self, today: NaiveDate) -> RepoResult<u64> {
        if !plans::in_reset_window(today) {
            return Err(RepoError::App(AppError::new(ErrorCode::ResetWindowClosed)));
        }

        let mut result = self
            .base
            .db()
            .query("UPDATE terv SET dates = [], filled_out = false RETURN AFTER")
            .await?;
        let reset: Vec<Plan> = result.take(0)?;
        Ok(reset.len() as u64)
    }
}
