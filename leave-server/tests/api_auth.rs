//! Login and session endpoints over the assembled router

use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use leave_server::auth::JwtConfig;
use leave_server::{Config, ServerState, api};

fn test_config() -> Config {
    Config {
        work_dir: "/tmp/leave-server-test".into(),
        http_port: 0,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".into(),
            expiration_minutes: 60,
            issuer: "leave-server".into(),
            audience: "leave-clients".into(),
        },
        environment: "development".into(),
        cors_origin: "*".into(),
        admin_email: "admin@hivatal.hu".into(),
        admin_password: Some("admin-password-123".into()),
        admin_name: "HR Admin".into(),
    }
}

async fn test_app() -> axum::Router {
    let state = ServerState::initialize_in_memory(&test_config())
        .await
        .expect("Failed to initialize state");
    api::create_router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_login_returns_token_and_user() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "admin@hivatal.hu", "password": "admin-password-123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["email"], "admin@hivatal.hu");
    assert_eq!(body["user"]["role"], "admin");
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "admin@hivatal.hu", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["code"], 1002);
}

#[tokio::test]
async fn test_unknown_email_gets_same_error_as_wrong_password() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "ghost@hivatal.hu", "password": "whatever-123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["code"], 1002);
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/auth/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_token() {
    let app = test_app().await;

    let login = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "admin@hivatal.hu", "password": "admin-password-123"}),
        ))
        .await
        .unwrap();
    let token = body_json(login).await["token"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/auth/me")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "HR Admin");
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn test_health_is_public() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
