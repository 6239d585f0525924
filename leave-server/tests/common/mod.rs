//! Shared helpers for integration tests

use leave_server::db::DbService;
use leave_server::db::models::{User, UserCreate};
use leave_server::db::repository::UserRepository;
use shared::Role;

pub async fn test_db() -> DbService {
    DbService::open_in_memory()
        .await
        .expect("Failed to open in-memory database")
}

pub async fn create_user(
    db: &DbService,
    name: &str,
    email: &str,
    role: Role,
    manager_id: Option<&str>,
    max_days: u32,
) -> User {
    let repo = UserRepository::new(db.db.clone());
    let manager = manager_id.map(|id| id.parse().expect("Invalid manager ID"));
    repo.create(UserCreate {
        name: name.to_string(),
        email: email.to_string(),
        password: "test-password-123".to_string(),
        role,
        manager,
        max_days,
    })
    .await
    .expect("Failed to create test user")
}

pub fn user_id(user: &User) -> String {
    user.id_string()
}
