//! Route definitions for the GameTracker HTTP API.
//!
//! Every route is served at the root and, when `server.api_prefix` is
//! set, again under `/api`. The router receives `AppState` and passes it
//! to all handlers via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{build_cors_layer, request_logging};
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .merge(user_routes())
        .merge(game_routes())
        .merge(review_routes())
        .merge(health_routes());

    let router = if state.config.server.api_prefix {
        Router::new().nest("/api", routes.clone()).merge(routes)
    } else {
        routes
    };

    router
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&state.config.server.cors))
        .with_state(state)
}

/// Account endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/register", post(handlers::user::register))
        .route("/users/login", post(handlers::user::login))
        .route(
            "/users/me",
            get(handlers::user::me).put(handlers::user::update_profile),
        )
}

/// Game library CRUD
fn game_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/games",
            get(handlers::game::list).post(handlers::game::create),
        )
        .route(
            "/games/{id}",
            get(handlers::game::get)
                .put(handlers::game::update)
                .delete(handlers::game::delete),
        )
}

/// Review endpoints
fn review_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reviews",
            get(handlers::review::list_own).post(handlers::review::create),
        )
        .route("/reviews/game/{id}", get(handlers::review::list_for_game))
        .route(
            "/reviews/{id}",
            put(handlers::review::update).delete(handlers::review::delete),
        )
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
