//! Sick-leave tracking against the embedded database

mod common;

use chrono::NaiveDate;
use common::{create_user, test_db, user_id};
use leave_server::attendance;
use leave_server::db::repository::SickLeaveRepository;
use shared::{AppError, ErrorCode, Role};

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, m, d).unwrap()
}

#[tokio::test]
async fn test_start_and_end_period() {
    let db = test_db().await;
    let user = create_user(&db, "Dolgozo", "d@hivatal.hu", Role::Employee, None, 10).await;

    let repo = SickLeaveRepository::new(db.db.clone());
    let period = repo.start(&user_id(&user), date(3, 10)).await.unwrap();
    assert!(period.is_ongoing());

    let closed = repo.end(&user_id(&user), date(3, 14)).await.unwrap();
    assert_eq!(closed.end_date, Some(date(3, 14)));
    assert!(repo.find_ongoing(&user_id(&user)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_second_ongoing_period_conflicts() {
    let db = test_db().await;
    let user = create_user(&db, "Dolgozo", "d@hivatal.hu", Role::Employee, None, 10).await;

    let repo = SickLeaveRepository::new(db.db.clone());
    repo.start(&user_id(&user), date(3, 10)).await.unwrap();

    let err: AppError = repo
        .start(&user_id(&user), date(3, 20))
        .await
        .unwrap_err()
        .into();
    assert_eq!(err.code, ErrorCode::SickLeaveOngoing);
}

#[tokio::test]
async fn test_end_without_ongoing_period() {
    let db = test_db().await;
    let user = create_user(&db, "Dolgozo", "d@hivatal.hu", Role::Employee, None, 10).await;

    let repo = SickLeaveRepository::new(db.db.clone());
    let err: AppError = repo
        .end(&user_id(&user), date(3, 14))
        .await
        .unwrap_err()
        .into();
    assert_eq!(err.code, ErrorCode::NoOngoingSickLeave);
}

#[tokio::test]
async fn test_cumulative_days_across_periods() {
    let db = test_db().await;
    let user = create_user(&db, "Dolgozo", "d@hivatal.hu", Role::Employee, None, 10).await;

    let repo = SickLeaveRepository::new(db.db.clone());
    repo.start(&user_id(&user), date(1, 5)).await.unwrap();
    repo.end(&user_id(&user), date(1, 8)).await.unwrap();
    repo.start(&user_id(&user), date(3, 9)).await.unwrap();
    repo.end(&user_id(&user), date(3, 14)).await.unwrap();
    // Ongoing period, not counted yet
    repo.start(&user_id(&user), date(5, 1)).await.unwrap();

    let periods = repo.find_by_user(&user_id(&user)).await.unwrap();
    assert_eq!(periods.len(), 3);
    assert_eq!(attendance::cumulative_sick_days(&periods), 4 + 6);
}

#[tokio::test]
async fn test_recent_keeps_latest_five() {
    let db = test_db().await;
    let user = create_user(&db, "Dolgozo", "d@hivatal.hu", Role::Employee, None, 10).await;

    let repo = SickLeaveRepository::new(db.db.clone());
    for month in 1..=6 {
        repo.start(&user_id(&user), date(month, 1)).await.unwrap();
        repo.end(&user_id(&user), date(month, 3)).await.unwrap();
    }

    let recent = repo.find_recent(&user_id(&user)).await.unwrap();
    assert_eq!(recent.len(), 5);
    // Newest first, the January period fell off
    assert_eq!(recent[0].start_date, date(6, 1));
    assert!(recent.iter().all(|p| p.start_date > date(1, 1)));
}

#[tokio::test]
async fn test_delete_period() {
    let db = test_db().await;
    let user = create_user(&db, "Dolgozo", "d@hivatal.hu", Role::Employee, None, 10).await;

    let repo = SickLeaveRepository::new(db.db.clone());
    let period = repo.start(&user_id(&user), date(3, 10)).await.unwrap();
    assert!(repo.delete(&period.id_string()).await.unwrap());
    assert!(repo.find_by_user(&user_id(&user)).await.unwrap().is_empty());

    let err: AppError = repo.delete(&period.id_string()).await.unwrap_err().into();
    assert_eq!(err.code, ErrorCode::SickLeaveNotFound);
}
