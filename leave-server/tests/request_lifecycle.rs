//! Leave-request lifecycle against the embedded database

mod common;

use chrono::NaiveDate;
use common::{create_user, test_db, user_id};
use leave_server::db::models::{LeaveRequestCreate, RequestState};
use leave_server::db::repository::{RequestRepository, UserRepository};
use shared::{AppError, ErrorCode, Role};

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, m, d).unwrap()
}

fn paid_request(dates: Vec<NaiveDate>) -> LeaveRequestCreate {
    LeaveRequestCreate {
        dates,
        leave_type: "SZ".to_string(),
        note: None,
        manager_id: None,
    }
}

#[tokio::test]
async fn test_approval_deducts_paid_leave_balance() {
    let db = test_db().await;
    let manager = create_user(&db, "Vezeto", "vezeto@hivatal.hu", Role::OfficeLead, None, 25).await;
    let employee = create_user(
        &db,
        "Dolgozo",
        "dolgozo@hivatal.hu",
        Role::Employee,
        Some(&user_id(&manager)),
        10,
    )
    .await;

    let requests = RequestRepository::new(db.db.clone());
    let request = requests
        .create(
            &user_id(&employee),
            &user_id(&manager),
            paid_request(vec![date(3, 10), date(3, 11), date(3, 12)]),
        )
        .await
        .unwrap();
    assert_eq!(request.state, RequestState::Pending);

    let approved = requests.approve(&request.id_string()).await.unwrap();
    assert_eq!(approved.state, RequestState::Approved);

    let users = UserRepository::new(db.db.clone());
    let employee = users
        .find_by_id(&user_id(&employee))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(employee.remaining_days, 7);
}

#[tokio::test]
async fn test_approval_of_unpaid_type_leaves_balance() {
    let db = test_db().await;
    let manager = create_user(&db, "Vezeto", "vezeto@hivatal.hu", Role::OfficeLead, None, 25).await;
    let employee = create_user(
        &db,
        "Dolgozo",
        "dolgozo@hivatal.hu",
        Role::Employee,
        Some(&user_id(&manager)),
        10,
    )
    .await;

    let requests = RequestRepository::new(db.db.clone());
    let request = requests
        .create(
            &user_id(&employee),
            &user_id(&manager),
            LeaveRequestCreate {
                dates: vec![date(4, 1), date(4, 2)],
                leave_type: "TP".to_string(),
                note: None,
                manager_id: None,
            },
        )
        .await
        .unwrap();

    requests.approve(&request.id_string()).await.unwrap();

    let users = UserRepository::new(db.db.clone());
    let employee = users
        .find_by_id(&user_id(&employee))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(employee.remaining_days, 10);
}

#[tokio::test]
async fn test_approval_fails_on_insufficient_days() {
    let db = test_db().await;
    let manager = create_user(&db, "Vezeto", "vezeto@hivatal.hu", Role::OfficeLead, None, 25).await;
    let employee = create_user(
        &db,
        "Dolgozo",
        "dolgozo@hivatal.hu",
        Role::Employee,
        Some(&user_id(&manager)),
        2,
    )
    .await;

    let requests = RequestRepository::new(db.db.clone());
    let request = requests
        .create(
            &user_id(&employee),
            &user_id(&manager),
            paid_request(vec![date(3, 10), date(3, 11), date(3, 12)]),
        )
        .await
        .unwrap();

    let err: AppError = requests
        .approve(&request.id_string())
        .await
        .unwrap_err()
        .into();
    assert_eq!(err.code, ErrorCode::InsufficientDays);

    // Nothing was deducted and the request stays pending
    let users = UserRepository::new(db.db.clone());
    let employee = users
        .find_by_id(&user_id(&employee))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(employee.remaining_days, 2);
    let request = requests
        .find_by_id(&request.id_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(request.state, RequestState::Pending);
}

#[tokio::test]
async fn test_second_decision_conflicts() {
    let db = test_db().await;
    let manager = create_user(&db, "Vezeto", "vezeto@hivatal.hu", Role::OfficeLead, None, 25).await;
    let employee = create_user(
        &db,
        "Dolgozo",
        "dolgozo@hivatal.hu",
        Role::Employee,
        Some(&user_id(&manager)),
        10,
    )
    .await;

    let requests = RequestRepository::new(db.db.clone());
    let request = requests
        .create(
            &user_id(&employee),
            &user_id(&manager),
            paid_request(vec![date(3, 10)]),
        )
        .await
        .unwrap();

    requests.approve(&request.id_string()).await.unwrap();

    let err: AppError = requests
        .reject(&request.id_string(), "too late".to_string())
        .await
        .unwrap_err()
        .into();
    assert_eq!(err.code, ErrorCode::RequestAlreadyDecided);

    let err: AppError = requests
        .approve(&request.id_string())
        .await
        .unwrap_err()
        .into();
    assert_eq!(err.code, ErrorCode::RequestAlreadyDecided);

    // The double approval did not deduct twice
    let users = UserRepository::new(db.db.clone());
    let employee = users
        .find_by_id(&user_id(&employee))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(employee.remaining_days, 9);
}

#[tokio::test]
async fn test_rejection_records_reason() {
    let db = test_db().await;
    let manager = create_user(&db, "Vezeto", "vezeto@hivatal.hu", Role::OfficeLead, None, 25).await;
    let employee = create_user(
        &db,
        "Dolgozo",
        "dolgozo@hivatal.hu",
        Role::Employee,
        Some(&user_id(&manager)),
        10,
    )
    .await;

    let requests = RequestRepository::new(db.db.clone());
    let request = requests
        .create(
            &user_id(&employee),
            &user_id(&manager),
            paid_request(vec![date(3, 10), date(3, 11)]),
        )
        .await
        .unwrap();

    let rejected = requests
        .reject(&request.id_string(), "staffing shortage".to_string())
        .await
        .unwrap();
    assert_eq!(rejected.state, RequestState::Rejected);
    assert_eq!(rejected.reject_reason.as_deref(), Some("staffing shortage"));

    // Rejection never touches the balance
    let users = UserRepository::new(db.db.clone());
    let employee = users
        .find_by_id(&user_id(&employee))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(employee.remaining_days, 10);
}

#[tokio::test]
async fn test_delete_of_approved_request_restores_days() {
    let db = test_db().await;
    let manager = create_user(&db, "Vezeto", "vezeto@hivatal.hu", Role::OfficeLead, None, 25).await;
    let employee = create_user(
        &db,
        "Dolgozo",
        "dolgozo@hivatal.hu",
        Role::Employee,
        Some(&user_id(&manager)),
        10,
    )
    .await;

    let requests = RequestRepository::new(db.db.clone());
    let request = requests
        .create(
            &user_id(&employee),
            &user_id(&manager),
            paid_request(vec![date(3, 10), date(3, 11), date(3, 12)]),
        )
        .await
        .unwrap();

    requests.approve(&request.id_string()).await.unwrap();
    requests.delete(&request.id_string()).await.unwrap();

    let users = UserRepository::new(db.db.clone());
    let employee = users
        .find_by_id(&user_id(&employee))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(employee.remaining_days, 10);
    assert!(
        requests
            .find_by_id(&request.id_string())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_pending_count_follows_decisions() {
    let db = test_db().await;
    let manager = create_user(&db, "Vezeto", "vezeto@hivatal.hu", Role::OfficeLead, None, 25).await;
    let employee = create_user(
        &db,
        "Dolgozo",
        "dolgozo@hivatal.hu",
        Role::Employee,
        Some(&user_id(&manager)),
        10,
    )
    .await;

    let requests = RequestRepository::new(db.db.clone());
    assert_eq!(requests.count_pending(&user_id(&manager)).await.unwrap(), 0);

    let first = requests
        .create(
            &user_id(&employee),
            &user_id(&manager),
            paid_request(vec![date(3, 10)]),
        )
        .await
        .unwrap();
    let _second = requests
        .create(
            &user_id(&employee),
            &user_id(&manager),
            paid_request(vec![date(5, 4)]),
        )
        .await
        .unwrap();
    assert_eq!(requests.count_pending(&user_id(&manager)).await.unwrap(), 2);

    requests.approve(&first.id_string()).await.unwrap();
    assert_eq!(requests.count_pending(&user_id(&manager)).await.unwrap(), 1);
}
