//! Integration tests for review ownership, uniqueness and listings.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

const TEXT: &str = "A genuinely great game.";

#[tokio::test]
async fn test_create_then_list_reviews() {
    let app = helpers::TestApp::new();
    let token = app.register("ann", "a@b.com", "secret1").await;
    let game = app.create_game("Hades").await;

    let response = app
        .request(
            "POST",
            "/reviews",
            Some(json!({ "game": game, "text": TEXT, "rating": 5 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.str_field("game"), game);
    assert_eq!(response.body["rating"], 5);

    let response = app
        .request("GET", &format!("/reviews/game/{game}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let listed = response.body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["user"]["username"], "ann");
    assert!(listed[0]["user"].get("email").is_none());

    let response = app.request("GET", "/reviews", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    let own = response.body.as_array().unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0]["game"]["title"], "Hades");
}

#[tokio::test]
async fn test_owner_in_body_is_ignored() {
    let app = helpers::TestApp::new();
    let ann = app.register("ann", "a@b.com", "secret1").await;
    let bob = app.register("bob", "bob@b.com", "secret1").await;
    let game = app.create_game("Hades").await;

    let bob_id = app
        .request("GET", "/users/me", None, Some(&bob))
        .await
        .str_field("id");
    let ann_id = app
        .request("GET", "/users/me", None, Some(&ann))
        .await
        .str_field("id");

    let response = app
        .request(
            "POST",
            "/reviews",
            Some(json!({ "game": game, "text": TEXT, "rating": 4, "user": bob_id })),
            Some(&ann),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.str_field("user"), ann_id);
}

#[tokio::test]
async fn test_second_review_of_same_game_conflicts() {
    let app = helpers::TestApp::new();
    let token = app.register("ann", "a@b.com", "secret1").await;
    let game = app.create_game("Hades").await;
    let body = json!({ "game": game, "text": TEXT, "rating": 5 });

    let first = app
        .request("POST", "/reviews", Some(body.clone()), Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/reviews", Some(body), Some(&token))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.message(), "You have already reviewed this game.");
    assert_eq!(second.str_field("error"), "CONFLICT");
}

#[tokio::test]
async fn test_concurrent_duplicate_reviews_leave_one() {
    let app = helpers::TestApp::new();
    let token = app.register("ann", "a@b.com", "secret1").await;
    let game = app.create_game("Hades").await;
    let body = json!({ "game": game, "text": TEXT, "rating": 3 });

    let attempts = (0..6).map(|_| app.request("POST", "/reviews", Some(body.clone()), Some(&token)));
    let responses = futures::future::join_all(attempts).await;

    let created = responses
        .iter()
        .filter(|r| r.status == StatusCode::CREATED)
        .count();
    let conflicts = responses
        .iter()
        .filter(|r| r.status == StatusCode::CONFLICT)
        .count();
    assert_eq!(created, 1);
    assert_eq!(conflicts, 5);

    let listed = app
        .request("GET", &format!("/reviews/game/{game}"), None, None)
        .await;
    assert_eq!(listed.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_rating_must_be_whole_number_in_range() {
    let app = helpers::TestApp::new();
    let token = app.register("ann", "a@b.com", "secret1").await;
    let game = app.create_game("Hades").await;

    for rating in [json!(0), json!(6), json!(4.5), json!("5")] {
        let response = app
            .request(
                "POST",
                "/reviews",
                Some(json!({ "game": game, "text": TEXT, "rating": rating })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "rating {rating}");
    }

    let response = app
        .request(
            "POST",
            "/reviews",
            Some(json!({ "game": game, "text": TEXT, "rating": 1 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_review_input_errors() {
    let app = helpers::TestApp::new();
    let token = app.register("ann", "a@b.com", "secret1").await;
    let game = app.create_game("Hades").await;

    let response = app
        .request("POST", "/reviews", Some(json!({ "game": game, "rating": 3 })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.message(),
        "Please provide the game ID, review text and rating."
    );

    let response = app
        .request(
            "POST",
            "/reviews",
            Some(json!({ "game": game, "text": "too short", "rating": 3 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Review text must be at least 10 characters.");

    let response = app
        .request(
            "POST",
            "/reviews",
            Some(json!({ "game": "not-an-id", "text": TEXT, "rating": 3 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/reviews",
            Some(json!({ "game": Uuid::new_v4().to_string(), "text": TEXT, "rating": 3 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Game not found.");

    let response = app
        .request(
            "POST",
            "/reviews",
            Some(json!({ "game": game, "text": TEXT, "rating": 3 })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_listings_without_reviews_are_empty() {
    let app = helpers::TestApp::new();
    let token = app.register("ann", "a@b.com", "secret1").await;

    let response = app
        .request("GET", &format!("/reviews/game/{}", Uuid::new_v4()), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));

    let response = app.request("GET", "/reviews", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));

    let response = app.request("GET", "/reviews/game/xyz", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_only_owner_may_modify_review() {
    let app = helpers::TestApp::new();
    let ann = app.register("ann", "a@b.com", "secret1").await;
    let bob = app.register("bob", "bob@b.com", "secret1").await;
    let game = app.create_game("Hades").await;

    let review_id = app
        .request(
            "POST",
            "/reviews",
            Some(json!({ "game": game, "text": TEXT, "rating": 4 })),
            Some(&ann),
        )
        .await
        .str_field("id");
    let path = format!("/reviews/{review_id}");

    let response = app
        .request("PUT", &path, Some(json!({ "rating": 1 })), Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Not authorized to modify this review.");

    let response = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({ "text": "Even better on a second run.", "rating": 5 })),
            Some(&ann),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["rating"], 5);
    assert_eq!(response.str_field("text"), "Even better on a second run.");
    assert_eq!(response.str_field("game"), game);

    let response = app.request("DELETE", &path, None, Some(&ann)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Review deleted successfully.");

    let response = app.request("DELETE", &path, None, Some(&ann)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Review not found.");
}

#[tokio::test]
async fn test_update_with_bad_rating_changes_nothing() {
    let app = helpers::TestApp::new();
    let token = app.register("ann", "a@b.com", "secret1").await;
    let game = app.create_game("Hades").await;

    let review_id = app
        .request(
            "POST",
            "/reviews",
            Some(json!({ "game": game, "text": TEXT, "rating": 4 })),
            Some(&token),
        )
        .await
        .str_field("id");
    let path = format!("/reviews/{review_id}");

    for rating in [json!(0), json!(6), json!(4.5), json!("5")] {
        let response = app
            .request("PUT", &path, Some(json!({ "rating": rating })), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "rating {rating}");
        assert_eq!(
            response.message(),
            "Rating must be a whole number between 1 and 5."
        );
    }

    let own = app.request("GET", "/reviews", None, Some(&token)).await;
    assert_eq!(own.body[0]["rating"], 4);
}

#[tokio::test]
async fn test_update_checks_review_and_owner_before_rating() {
    let app = helpers::TestApp::new();
    let ann = app.register("ann", "a@b.com", "secret1").await;
    let bob = app.register("bob", "bob@b.com", "secret1").await;
    let game = app.create_game("Hades").await;

    let review_id = app
        .request(
            "POST",
            "/reviews",
            Some(json!({ "game": game, "text": TEXT, "rating": 4 })),
            Some(&ann),
        )
        .await
        .str_field("id");

    let response = app
        .request(
            "PUT",
            &format!("/reviews/{review_id}"),
            Some(json!({ "rating": 9 })),
            Some(&bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Not authorized to modify this review.");

    let response = app
        .request(
            "PUT",
            &format!("/reviews/{}", Uuid::new_v4()),
            Some(json!({ "rating": 0 })),
            Some(&ann),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Review not found.");
}

#[tokio::test]
async fn test_update_with_blank_text_keeps_body() {
    let app = helpers::TestApp::new();
    let token = app.register("ann", "a@b.com", "secret1").await;
    let game = app.create_game("Hades").await;

    let review_id = app
        .request(
            "POST",
            "/reviews",
            Some(json!({ "game": game, "text": TEXT, "rating": 4 })),
            Some(&token),
        )
        .await
        .str_field("id");

    let response = app
        .request(
            "PUT",
            &format!("/reviews/{review_id}"),
            Some(json!({ "text": "", "rating": 2 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str_field("text"), TEXT);
    assert_eq!(response.body["rating"], 2);
}

#[tokio::test]
async fn test_deleting_game_removes_its_reviews() {
    let app = helpers::TestApp::new();
    let token = app.register("ann", "a@b.com", "secret1").await;
    let game = app.create_game("Hades").await;

    app.request(
        "POST",
        "/reviews",
        Some(json!({ "game": game, "text": TEXT, "rating": 4 })),
        Some(&token),
    )
    .await;

    let response = app
        .request("DELETE", &format!("/games/{game}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let own = app.request("GET", "/reviews", None, Some(&token)).await;
    assert_eq!(own.body, json!([]));
}
