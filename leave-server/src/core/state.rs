use std::path::PathBuf;
use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::AppResult;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::notify::NotifyService;

/// Shared server state, held by every handler
///
/// Holds shared references to every service; `Clone` is a shallow copy.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Configuration (immutable) |
/// | db | Surreal<Db> | Embedded database |
/// | jwt_service | Arc<JwtService> | JWT authentication |
/// | notify | NotifyService | Notification queue and sessions |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT authentication service
    pub jwt_service: Arc<JwtService>,
    /// Notification queue and session registry
    pub notify: NotifyService,
}

impl ServerState {
    /// Initialize the server state
    ///
    /// 1. ensure the work directory structure exists
    /// 2. open the embedded database under `work_dir/database`
    /// 3. define the schema and seed the HR admin account
    /// 4. construct services (JWT, notifications)
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| shared::AppError::internal(format!("work dir setup failed: {}", e)))?;

        let db_path = config.database_dir().join("leave.db");
        let db_service = DbService::open(&db_path.to_string_lossy()).await?;
        db_service.seed_admin(config).await?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let notify = NotifyService::new();

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service,
            notify,
        })
    }

    /// Initialize against an in-memory database, for tests
    pub async fn initialize_in_memory(config: &Config) -> AppResult<Self> {
        let db_service = DbService::open_in_memory().await?;
        db_service.seed_admin(config).await?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let notify = NotifyService::new();

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service,
            notify,
        })
    }

    /// Start background tasks
    ///
    /// Must be called before `Server::run()`. Starts the notification
    /// dispatch worker.
    pub async fn start_background_tasks(&self) {
        self.notify.start_background_tasks(self.clone());
    }

    /// Get the database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// Get the work directory
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    /// Get the JWT service
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
