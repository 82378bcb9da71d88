//! Authentication API integration tests
//!
//! Registration, confirmation, login and bearer-token resolution.

use axum::http::StatusCode;
use chrono::Duration;
use pretty_assertions::assert_eq;
use serde_json::json;

use social_media_api::backend::auth::{
    AuthConfig, AuthEngine, DetailResponse, TokenResponse, UserResponse,
};

use crate::common::*;

#[tokio::test]
async fn test_register_user() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/register")
        .json(&json!({ "email": "test@example.net", "password": "1234" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "User created, please confirm your email.");
    assert!(body["confirmation_url"]
        .as_str()
        .unwrap()
        .contains("/confirm/"));
}

#[tokio::test]
async fn test_register_user_already_exists() {
    let app = TestApp::new().await;
    register_user(&app, "test@example.net", "1234").await;

    let response = app
        .server
        .post("/register")
        .json(&json!({ "email": "test@example.net", "password": "5678" }))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "A user with this email already exists");
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/register")
        .json(&json!({ "email": "not-an-email", "password": "1234" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_empty_password() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/register")
        .json(&json!({ "email": "test@example.net", "password": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_password_over_72_bytes() {
    let app = TestApp::new().await;
    let password = format!("{}correct-horse", "a".repeat(72));

    let response = app
        .server
        .post("/register")
        .json(&json!({ "email": "test@example.net", "password": password }))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "Password must be at most 72 bytes");
}

#[tokio::test]
async fn test_password_is_stored_hashed() {
    let app = TestApp::new().await;
    register_user(&app, "test@example.net", "1234").await;

    let stored: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE email = ?")
        .bind("test@example.net")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_ne!(stored, "1234");
    assert!(stored.starts_with("$2"));
}

#[tokio::test]
async fn test_confirm_user() {
    let app = TestApp::new().await;
    let url = register_user(&app, "test@example.net", "1234").await;

    let response = app.server.get(confirmation_path(&url)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<DetailResponse>().detail, "User Confirmed");

    let token = login_user(&app, "test@example.net", "1234").await;
    let me = app.server.get("/me").authorization_bearer(token).await;
    assert!(me.json::<UserResponse>().confirmed);
}

#[tokio::test]
async fn test_confirm_rejects_access_token() {
    let app = TestApp::new().await;
    register_user(&app, "test@example.net", "1234").await;
    let access = app.engine.create_access_token("test@example.net").unwrap();

    let response = app.server.get(&format!("/confirm/{access}")).await;

    assert_unauthorized(&response, "Could not validate credentials");
}

#[tokio::test]
async fn test_confirm_expired_token() {
    let app = TestApp::with_config(|b| b.confirmation_token_minutes(-1)).await;
    let url = register_user(&app, "test@example.net", "1234").await;

    let response = app.server.get(confirmation_path(&url)).await;

    assert_unauthorized(&response, "Token has expired");
}

#[tokio::test]
async fn test_confirm_unknown_account() {
    let app = TestApp::new().await;
    let token = app
        .engine
        .create_confirmation_token("nobody@example.net")
        .unwrap();

    let response = app.server.get(&format!("/confirm/{token}")).await;

    assert_unauthorized(&response, "Could not validate credentials");
}

#[tokio::test]
async fn test_login_user() {
    let app = TestApp::new().await;
    register_user(&app, "test@example.net", "1234").await;

    let response = app
        .server
        .post("/token")
        .json(&json!({ "email": "test@example.net", "password": "1234" }))
        .await;

    response.assert_status_ok();
    let body: TokenResponse = response.json();
    assert_eq!(body.token_type, "bearer");
    assert!(!body.access_token.is_empty());
}

#[tokio::test]
async fn test_login_user_not_exists() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/token")
        .json(&json!({ "email": "test@example.net", "password": "1234" }))
        .await;

    assert_unauthorized(&response, "Could not validate credentials");
}

#[tokio::test]
async fn test_login_wrong_password_matches_unknown_user() {
    let app = TestApp::new().await;
    register_user(&app, "test@example.net", "1234").await;

    let wrong = app
        .server
        .post("/token")
        .json(&json!({ "email": "test@example.net", "password": "4321" }))
        .await;
    let unknown = app
        .server
        .post("/token")
        .json(&json!({ "email": "other@example.net", "password": "1234" }))
        .await;

    assert_eq!(wrong.status_code(), unknown.status_code());
    assert_eq!(wrong.text(), unknown.text());
}

#[tokio::test]
async fn test_get_me() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "me@example.net").await;

    let response = app.server.get("/me").authorization_bearer(&user.token).await;

    response.assert_status_ok();
    let body: UserResponse = response.json();
    assert_eq!(body.email, user.email);
    assert!(body.confirmed);
    assert!(!response.text().contains("password"));
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new().await;

    let response = app.server.get("/me").await;

    assert_unauthorized(&response, "Could not validate credentials");
}

#[tokio::test]
async fn test_me_rejects_confirmation_token() {
    let app = TestApp::new().await;
    register_user(&app, "test@example.net", "1234").await;
    let token = app
        .engine
        .create_confirmation_token("test@example.net")
        .unwrap();

    let response = app.server.get("/me").authorization_bearer(token).await;

    assert_unauthorized(&response, "Could not validate credentials");
}

#[tokio::test]
async fn test_me_expired_token() {
    let app = TestApp::new().await;
    register_user(&app, "test@example.net", "1234").await;
    let expired = AuthEngine::new(
        &AuthConfig::new(TEST_SECRET, "HS256")
            .unwrap()
            .with_access_ttl(Duration::minutes(-1)),
    )
    .create_access_token("test@example.net")
    .unwrap();

    let response = app.server.get("/me").authorization_bearer(expired).await;

    assert_unauthorized(&response, "Token has expired");
}

#[tokio::test]
async fn test_me_deleted_account() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "gone@example.net").await;
    sqlx::query("DELETE FROM users WHERE email = ?")
        .bind(&user.email)
        .execute(&app.pool)
        .await
        .unwrap();

    let response = app.server.get("/me").authorization_bearer(&user.token).await;

    assert_unauthorized(&response, "Could not validate credentials");
}

#[tokio::test]
async fn test_me_malformed_token() {
    let app = TestApp::new().await;

    let response = app.server.get("/me").authorization_bearer("garbage").await;

    assert_unauthorized(&response, "Could not validate credentials");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = TestApp::new().await;

    let response = app.server.get("/test-db").await;

    response.assert_status_ok();
    assert!(response.headers().get("x-request-id").is_some());
}
