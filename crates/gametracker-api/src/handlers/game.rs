//! Game library handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use gametracker_core::types::GameId;
use gametracker_entity::game::{Game, GameChanges, NewGame};

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{PathId, ValidJson};
use crate::state::AppState;

/// GET /games
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Game>>, ApiError> {
    Ok(Json(state.game_service.list().await?))
}

/// GET /games/{id}
pub async fn get(
    State(state): State<AppState>,
    PathId(id): PathId<GameId>,
) -> Result<Json<Game>, ApiError> {
    Ok(Json(state.game_service.get(id).await?))
}

/// POST /games
pub async fn create(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<NewGame>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let game = state.game_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// PUT /games/{id}
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId<GameId>,
    ValidJson(req): ValidJson<GameChanges>,
) -> Result<Json<Game>, ApiError> {
    Ok(Json(state.game_service.update(id, req).await?))
}

/// DELETE /games/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId<GameId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.game_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Game deleted successfully.")))
}
