//! Integration tests for the game library and health endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_game_crud() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/games",
            Some(json!({
                "title": "  Celeste ",
                "genre": "Platformer",
                "platform": "Switch",
                "status": "playing",
                "score": 5,
                "hours_played": 12.5
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.str_field("title"), "Celeste");
    assert_eq!(response.str_field("status"), "playing");
    let id = response.str_field("id");
    let path = format!("/games/{id}");

    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str_field("platform"), "Switch");

    let response = app
        .request("PUT", &path, Some(json!({ "status": "completed" })), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str_field("status"), "completed");
    assert_eq!(response.str_field("title"), "Celeste");

    let response = app.request("DELETE", &path, None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Game deleted successfully.");

    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Game not found.");
}

#[tokio::test]
async fn test_list_games_newest_first() {
    let app = helpers::TestApp::new();
    app.create_game("First").await;
    app.create_game("Second").await;

    let response = app.request("GET", "/games", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    let games = response.body.as_array().unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0]["title"], "Second");
    assert_eq!(games[1]["title"], "First");
}

#[tokio::test]
async fn test_game_validation() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/games", Some(json!({ "platform": "PC" })), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Genre is required., Title is required.");

    let response = app
        .request(
            "POST",
            "/games",
            Some(json!({ "title": "Doom", "genre": "Shooter", "score": 9 })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Score must be between 1 and 5.");

    let response = app
        .request(
            "POST",
            "/games",
            Some(json!({ "title": "Doom", "genre": "Shooter", "status": "abandoned" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_game_ids_are_checked() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/games/12345", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.str_field("error"), "VALIDATION_ERROR");

    let missing = format!("/games/{}", Uuid::new_v4());
    let response = app
        .request("PUT", &missing, Some(json!({ "title": "Nope" })), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("DELETE", &missing, None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_reports_store() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str_field("status"), "ok");
    assert_eq!(response.str_field("store"), "ok");

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}
