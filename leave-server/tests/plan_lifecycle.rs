//! Annual-plan lifecycle against the embedded database

mod common;

use chrono::NaiveDate;
use common::{create_user, test_db, user_id};
use leave_server::db::repository::PlanRepository;
use leave_server::plans;
use shared::{AppError, ErrorCode, Role};

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, m, d).unwrap()
}

#[tokio::test]
async fn test_get_or_create_returns_empty_plan() {
    let db = test_db().await;
    let user = create_user(&db, "Dolgozo", "d@hivatal.hu", Role::Employee, None, 3).await;

    let repo = PlanRepository::new(db.db.clone());
    let plan = repo.get_or_create(&user_id(&user)).await.unwrap();
    assert!(plan.dates.is_empty());
    assert!(!plan.filled_out);

    // Re-reading finds the same row rather than creating another
    let again = repo.get_or_create(&user_id(&user)).await.unwrap();
    assert_eq!(plan.id, again.id);
}

#[tokio::test]
async fn test_submit_flips_filled_out() {
    let db = test_db().await;
    let user = create_user(&db, "Dolgozo", "d@hivatal.hu", Role::Employee, None, 3).await;

    let repo = PlanRepository::new(db.db.clone());
    repo.get_or_create(&user_id(&user)).await.unwrap();

    let dates = plans::validate_submission(&[date(3, 10), date(3, 11), date(3, 12)], 3).unwrap();
    let plan = repo.submit(&user_id(&user), dates).await.unwrap();
    assert!(plan.filled_out);
    assert_eq!(plan.dates.len(), 3);
}

#[tokio::test]
async fn test_resubmission_conflicts() {
    let db = test_db().await;
    let user = create_user(&db, "Dolgozo", "d@hivatal.hu", Role::Employee, None, 2).await;

    let repo = PlanRepository::new(db.db.clone());
    repo.get_or_create(&user_id(&user)).await.unwrap();
    repo.submit(&user_id(&user), vec![date(3, 10), date(3, 11)])
        .await
        .unwrap();

    let err: AppError = repo
        .submit(&user_id(&user), vec![date(4, 1), date(4, 2)])
        .await
        .unwrap_err()
        .into();
    assert_eq!(err.code, ErrorCode::PlanAlreadyFilled);
}

#[tokio::test]
async fn test_reset_reopens_plan() {
    let db = test_db().await;
    let user = create_user(&db, "Dolgozo", "d@hivatal.hu", Role::Employee, None, 2).await;

    let repo = PlanRepository::new(db.db.clone());
    repo.get_or_create(&user_id(&user)).await.unwrap();
    repo.submit(&user_id(&user), vec![date(3, 10), date(3, 11)])
        .await
        .unwrap();

    let plan = repo.reset(&user_id(&user)).await.unwrap();
    assert!(!plan.filled_out);
    assert!(plan.dates.is_empty());

    // A fresh submission goes through again
    repo.submit(&user_id(&user), vec![date(5, 4), date(5, 5)])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_reset_creates_missing_plan() {
    let db = test_db().await;
    let user = create_user(&db, "Dolgozo", "d@hivatal.hu", Role::Employee, None, 2).await;

    // No plan row exists yet; an admin pre-reset still succeeds
    let repo = PlanRepository::new(db.db.clone());
    let plan = repo.reset(&user_id(&user)).await.unwrap();
    assert!(plan.dates.is_empty());
    assert!(!plan.filled_out);

    // The created row is the one later operations see
    let found = repo.find_by_user(&user_id(&user)).await.unwrap().unwrap();
    assert_eq!(plan.id, found.id);
    repo.submit(&user_id(&user), vec![date(3, 10), date(3, 11)])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_reset_all_only_in_january() {
    let db = test_db().await;
    let user = create_user(&db, "Dolgozo", "d@hivatal.hu", Role::Employee, None, 2).await;

    let repo = PlanRepository::new(db.db.clone());
    repo.get_or_create(&user_id(&user)).await.unwrap();
    repo.submit(&user_id(&user), vec![date(3, 10), date(3, 11)])
        .await
        .unwrap();

    let err: AppError = repo
        .reset_all(date(6, 15))
        .await
        .unwrap_err()
        .into();
    assert_eq!(err.code, ErrorCode::ResetWindowClosed);

    let reset = repo.reset_all(date(1, 5)).await.unwrap();
    assert_eq!(reset, 1);

    let plan = repo.find_by_user(&user_id(&user)).await.unwrap().unwrap();
    assert!(!plan.filled_out);
}
