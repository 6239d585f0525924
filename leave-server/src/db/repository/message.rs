//! Notice Repository (`uzenet` table)

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Message;
use chrono::NaiveDate;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct MessageRepository {
    base: BaseRepository,
}

impl MessageRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn parse_id(id: &str) -> RepoResult<RecordId> {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))
    }

    /// Notices addressed to a user, newest first
    pub async fn find_for_user(&self, user_id: &str) -> RepoResult<Vec<Message>> {
        let user = Self::parse_id(user_id)?;
        let messages: Vec<Message> = self
            .base
            .db()
            .query("SELECT * FROM uzenet WHERE user = $user ORDER BY created_at DESC")
            .bind(("user", user))
            .await?
            .take(0)?;
        Ok(messages)
    }

    /// Send a notice to a user
    pub async fn create(
        &self,
        recipient_id: &str,
        sender_name: String,
        date: NaiveDate,
        content: String,
    ) -> RepoResult<Message> {
        let user = Self::parse_id(recipient_id)?;
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE uzenet SET
                    user = $user,
                    sender_name = $sender_name,
                    date = $date,
                    content = $content,
                    created_at = time::now()
                RETURN AFTER"#,
            )
            .bind(("user", user))
            .bind(("sender_name", sender_name))
            .bind(("date", date))
            .bind(("content", content))
            .await?;

        let created: Option<Message> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create message".to_string()))
    }
}
