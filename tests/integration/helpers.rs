//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use gametracker_api::{AppState, build_app};
use gametracker_auth::password::PasswordHasher;
use gametracker_core::config::{AppConfig, PasswordHashConfig, StoreBackend};
use gametracker_core::traits::CredentialHasher;
use gametracker_database::store::Stores;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Direct access to the stores behind the router
    pub stores: Stores,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.backend = StoreBackend::Memory;
        config.auth.jwt_secret = TEST_SECRET.to_string();
        // Keep hashing cheap; the algorithm is unchanged.
        config.auth.password_hash = PasswordHashConfig {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        };

        let hasher: Arc<dyn CredentialHasher> = Arc::new(
            PasswordHasher::new(&config.auth.password_hash).expect("valid argon2 params"),
        );
        let stores = Stores::memory(Arc::clone(&hasher));
        let state = AppState::new(config.clone(), stores.clone(), hasher);

        Self {
            router: build_app(state),
            stores,
            config,
        }
    }

    /// Register a user and return its bearer token.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/users/register",
                Some(serde_json::json!({
                    "username": username,
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Register failed: {:?}",
            response.body
        );
        response.token()
    }

    /// Add a game and return its id.
    pub async fn create_game(&self, title: &str) -> String {
        let response = self
            .request(
                "POST",
                "/games",
                Some(serde_json::json!({ "title": title, "genre": "Action" })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create game failed: {:?}",
            response.body
        );
        response.str_field("id")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str, token).await
    }

    /// Make an HTTP request with a literal body.
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// A string field of the JSON body.
    pub fn str_field(&self, field: &str) -> String {
        self.body
            .get(field)
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| panic!("No string `{field}` in {:?}", self.body))
            .to_string()
    }

    /// The bearer token of an auth response.
    pub fn token(&self) -> String {
        self.str_field("token")
    }

    /// The `message` of an error or confirmation body.
    pub fn message(&self) -> String {
        self.str_field("message")
    }
}
