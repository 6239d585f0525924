//! User Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{User, UserCreate, UserUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all users ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<User>> {
        let users: Vec<User> = self
            .base
            .db()
            .query("SELECT * FROM user ORDER BY name")
            .await?
            .take(0)?;
        Ok(users)
    }

    /// Find users whose email domain matches, ordered by name
    ///
    /// Offices share a mail domain, so office leads see exactly the
    /// users of their own office.
    pub async fn find_by_domain(&self, domain: &str) -> RepoResult<Vec<User>> {
        let suffix = format!("@{}", domain);
        let users: Vec<User> = self
            .base
            .db()
            .query("SELECT * FROM user WHERE string::ends_with(email, $suffix) ORDER BY name")
            .bind(("suffix", suffix))
            .await?
            .take(0)?;
        Ok(users)
    }

    /// Find user by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let user: Option<User> = self.base.db().select(thing).await?;
        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email_owned = email.to_lowercase();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create a new user
    pub async fn create(&self, data: UserCreate) -> RepoResult<User> {
        let email = data.email.to_lowercase();
        if self.find_by_email(&email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already registered",
                email
            )));
        }

        if let Some(ref manager) = data.manager
            && self.find_by_id(&manager.to_string()).await?.is_none()
        {
            return Err(RepoError::NotFound(format!(
                "Manager {} not found",
                manager
            )));
        }

        let hash_pass = User::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE user SET
                    name = $name,
                    email = $email,
                    hash_pass = $hash_pass,
                    role = $role,
                    manager = $manager,
                    max_days = $max_days,
                    remaining_days = $max_days,
                    created_at = time::now()
                RETURN AFTER"#,
            )
            .bind(("name", data.name))
            .bind(("email", email))
            .bind(("hash_pass", hash_pass))
            .bind(("role", data.role))
            .bind(("manager", data.manager))
            .bind(("max_days", data.max_days))
            .await?;

        let created: Option<User> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    /// Update a user
    pub async fn update(&self, id: &str, data: UserUpdate) -> RepoResult<User> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("User {} not found", id)))?;

        if let Some(ref manager) = data.manager
            && self.find_by_id(&manager.to_string()).await?.is_none()
        {
            return Err(RepoError::NotFound(format!(
                "Manager {} not found",
                manager
            )));
        }

        let hash_pass = match data.password {
            Some(ref password) => Some(
                User::hash_password(password)
                    .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?,
            ),
            None => None,
        };

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = $name OR name,
                    hash_pass = $hash_pass OR hash_pass,
                    role = $role OR role,
                    manager = IF $has_manager THEN $manager ELSE manager END,
                    max_days = IF $has_max_days THEN $max_days ELSE max_days END,
                    remaining_days = IF $has_remaining THEN $remaining_days ELSE remaining_days END
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("name", data.name))
            .bind(("hash_pass", hash_pass))
            .bind(("role", data.role))
            .bind(("has_manager", data.manager.is_some()))
            .bind(("manager", data.manager))
            .bind(("has_max_days", data.max_days.is_some()))
            .bind(("max_days", data.max_days))
            .bind(("has_remaining", data.remaining_days.is_some()))
            .bind(("remaining_days", data.remaining_days))
            .await?;

        result
            .take::<Option<User>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("User {} not found", id)))
    }
}
