//! Database Module
//!
//! Embedded SurrealDB storage: connection setup, schema definition and
//! the seeded HR admin account.

pub mod models;
pub mod repository;

use shared::{AppError, Role};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::core::Config;
use crate::db::models::User;

const NAMESPACE: &str = "hr";
const DATABASE: &str = "leave";

/// Database service - owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the on-disk database at `db_path` (RocksDB engine)
    pub async fn open(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        let service = Self { db };
        service.setup().await?;

        tracing::info!("Database opened at {}", db_path);
        Ok(service)
    }

    /// Open an in-memory database, for tests
    pub async fn open_in_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        let service = Self { db };
        service.setup().await?;
        Ok(service)
    }

    async fn setup(&self) -> Result<(), AppError> {
        self.db
            .use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;
        self.define_schema().await
    }

    /// Define indexes
    ///
    /// The unique indexes back the application-level guarantees:
    /// one account per email, one annual plan per user.
    async fn define_schema(&self) -> Result<(), AppError> {
        self.db
            .query(
                r#"
                DEFINE INDEX IF NOT EXISTS user_email_idx ON TABLE user FIELDS email UNIQUE;
                DEFINE INDEX IF NOT EXISTS terv_user_idx ON TABLE terv FIELDS user UNIQUE;
                "#,
            )
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
        Ok(())
    }

    /// Seed the HR admin account on first run
    ///
    /// Does nothing when the account already exists. A missing
    /// `ADMIN_PASSWORD` is only an error when the account has to be
    /// created.
    pub async fn seed_admin(&self, config: &Config) -> Result<(), AppError> {
        let email = config.admin_email.to_lowercase();
        let mut result = self
            .db
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email.clone()))
            .await
            .map_err(|e| AppError::database(format!("Admin lookup failed: {e}")))?;
        let existing: Vec<User> = result
            .take(0)
            .map_err(|e| AppError::database(format!("Admin lookup failed: {e}")))?;

        if !existing.is_empty() {
            return Ok(());
        }

        let Some(password) = &config.admin_password else {
            return Err(AppError::with_message(
                shared::ErrorCode::ConfigError,
                "ADMIN_PASSWORD must be set to seed the admin account",
            ));
        };

        let hash_pass = User::hash_password(password)
            .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;

        self.db
            .query(
                r#"CREATE user SET
                    name = $name,
                    email = $email,
                    hash_pass = $hash_pass,
                    role = $role,
                    max_days = 0,
                    remaining_days = 0,
                    created_at = time::now()"#,
            )
            .bind(("name", config.admin_name.clone()))
            .bind(("email", email.clone()))
            .bind(("hash_pass", hash_pass))
            .bind(("role", Role::Admin))
            .await
            .map_err(|e| AppError::database(format!("Failed to seed admin: {e}")))?;

        tracing::info!(email = %email, "Seeded HR admin account");
        Ok(())
    }
}
