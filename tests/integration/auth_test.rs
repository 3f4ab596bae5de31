//! Integration tests for registration, login and the auth gate.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;
use serde_json::json;

use gametracker_auth::jwt::JwtEncoder;
use gametracker_core::types::UserId;

#[tokio::test]
async fn test_register_login_me_flow() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/users/register",
            Some(json!({ "username": "ann", "email": "a@b.com", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.str_field("username"), "ann");
    assert!(response.body.get("password").is_none());
    assert!(response.body.get("password_hash").is_none());
    let registered_id = response.str_field("id");

    let response = app
        .request(
            "POST",
            "/users/login",
            Some(json!({ "email": "a@b.com", "password": "wrong-password" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Invalid credentials.");

    let response = app
        .request(
            "POST",
            "/users/login",
            Some(json!({ "email": "a@b.com", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let token = response.token();

    let response = app.request("GET", "/users/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str_field("id"), registered_id);
    assert_eq!(response.str_field("username"), "ann");
    assert_eq!(response.str_field("email"), "a@b.com");
    assert!(response.body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_routes_are_also_served_under_api_prefix() {
    let app = helpers::TestApp::new();
    let token = app.register("ann", "a@b.com", "secret1").await;

    let response = app.request("GET", "/api/users/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str_field("username"), "ann");
}

#[tokio::test]
async fn test_register_twice_with_same_email_fails() {
    let app = helpers::TestApp::new();
    app.register("ann", "a@b.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/users/register",
            Some(json!({ "username": "someone", "email": "a@b.com", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Username or email already in use.");
}

#[tokio::test]
async fn test_register_validation_messages() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/users/register",
            Some(json!({ "username": "ann", "email": "a@b.com" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Please fill in all fields.");
    assert_eq!(response.str_field("error"), "VALIDATION_ERROR");

    let response = app
        .request(
            "POST",
            "/users/register",
            Some(json!({ "username": "an", "email": "not-an-email", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.message(),
        "Please enter a valid email address., Username must be at least 3 characters."
    );

    let response = app
        .request(
            "POST",
            "/users/register",
            Some(json!({ "username": "ann", "email": "a@b.com", "password": "123" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = helpers::TestApp::new();
    let response = app
        .raw_request("POST", "/users/register", "{not json".to_string(), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.str_field("error"), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let app = helpers::TestApp::new();
    app.register("ann", "a@b.com", "secret1").await;

    let unknown = app
        .request(
            "POST",
            "/users/login",
            Some(json!({ "email": "nobody@b.com", "password": "secret1" })),
            None,
        )
        .await;
    let wrong = app
        .request(
            "POST",
            "/users/login",
            Some(json!({ "email": "a@b.com", "password": "secret2" })),
            None,
        )
        .await;

    assert_eq!(unknown.status, wrong.status);
    assert_eq!(unknown.body, wrong.body);

    let missing = app
        .request("POST", "/users/login", Some(json!({ "email": "a@b.com" })), None)
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.message(), "Please enter your email and password.");
}

#[tokio::test]
async fn test_gate_rejects_missing_token() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/users/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Not authorized, no token provided.");
    assert_eq!(response.str_field("error"), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_gate_rejects_garbage_and_expired_tokens() {
    let app = helpers::TestApp::new();
    app.register("ann", "a@b.com", "secret1").await;

    let response = app
        .request("GET", "/users/me", None, Some("definitely.not.valid"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Not authorized, token invalid or expired.");

    let user = app
        .stores
        .users
        .find_by_email("a@b.com")
        .await
        .unwrap()
        .unwrap();
    let expired = JwtEncoder::new(&app.config.auth)
        .issue_with_ttl(user.id, Duration::hours(-1))
        .unwrap();
    let response = app.request("GET", "/users/me", None, Some(&expired)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Not authorized, token invalid or expired.");
}

#[tokio::test]
async fn test_gate_rejects_token_for_unknown_user() {
    let app = helpers::TestApp::new();
    let token = JwtEncoder::new(&app.config.auth)
        .issue(UserId::new())
        .unwrap();

    let response = app.request("GET", "/users/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Not authorized, user not found.");
}

#[tokio::test]
async fn test_profile_update_keeps_password_unless_changed() {
    let app = helpers::TestApp::new();
    let token = app.register("ann", "a@b.com", "secret1").await;
    let before = app
        .stores
        .users
        .find_by_email("a@b.com")
        .await
        .unwrap()
        .unwrap();

    let response = app
        .request("PUT", "/users/me", Some(json!({ "username": "annie" })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str_field("username"), "annie");

    let after = app.stores.users.find_by_id(before.id).await.unwrap().unwrap();
    assert_eq!(after.password_hash, before.password_hash);

    let response = app
        .request("PUT", "/users/me", Some(json!({ "password": "another1" })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/users/login",
            Some(json!({ "email": "a@b.com", "password": "another1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_profile_update_to_taken_email_conflicts() {
    let app = helpers::TestApp::new();
    app.register("ann", "a@b.com", "secret1").await;
    let token = app.register("bob", "bob@b.com", "secret1").await;

    let response = app
        .request("PUT", "/users/me", Some(json!({ "email": "a@b.com" })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}
