use std::path::PathBuf;

use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/leave-server | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | CORS_ORIGIN | * | Allowed CORS origin |
/// | ADMIN_EMAIL | admin@hivatal.hu | Seeded HR admin account email |
/// | ADMIN_PASSWORD | (none) | Seeded HR admin password, required on first run |
/// | ADMIN_NAME | HR Admin | Seeded HR admin display name |
/// | JWT_SECRET | (generated in dev) | Token signing secret |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/leave HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Allowed CORS origin
    pub cors_origin: String,
    /// Email of the seeded HR admin account
    pub admin_email: String,
    /// Password of the seeded HR admin account, only used when the
    /// account does not exist yet
    pub admin_password: Option<String>,
    /// Display name of the seeded HR admin account
    pub admin_name: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| "/var/lib/leave-server".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            cors_origin: std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".into()),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@hivatal.hu".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
            admin_name: std::env::var("ADMIN_NAME").unwrap_or_else(|_| "HR Admin".into()),
        }
    }

    /// Override the work directory and port, typically for tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory holding the embedded database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory holding rolling log files
    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the work directory structure if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_dir_structure_created() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::with_overrides(dir.path().to_string_lossy(), 0);

        config
            .ensure_work_dir_structure()
            .expect("Failed to create work dir structure");
        assert!(config.database_dir().is_dir());
        assert!(config.logs_dir().is_dir());
    }
}
