//! Review handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use gametracker_core::types::{GameId, ReviewId};
use gametracker_entity::review::{Review, ReviewWithAuthor, ReviewWithGame};

use crate::dto::request::{CreateReviewRequest, UpdateReviewRequest};
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PathId, ValidJson};
use crate::state::AppState;

/// GET /reviews
pub async fn list_own(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<ReviewWithGame>>, ApiError> {
    let reviews = state.review_service.list_own(auth.id).await?;
    Ok(Json(reviews))
}

/// GET /reviews/game/{id}
pub async fn list_for_game(
    State(state): State<AppState>,
    PathId(game_id): PathId<GameId>,
) -> Result<Json<Vec<ReviewWithAuthor>>, ApiError> {
    let reviews = state.review_service.list_for_game(game_id).await?;
    Ok(Json(reviews))
}

/// POST /reviews
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let draft = req.into_draft()?;
    let review = state
        .review_service
        .create(auth.id, draft.game_id, &draft.text, draft.rating)
        .await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// PUT /reviews/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    PathId(id): PathId<ReviewId>,
    ValidJson(req): ValidJson<UpdateReviewRequest>,
) -> Result<Json<Review>, ApiError> {
    let review = state.review_service.update(auth.id, id, req.into()).await?;
    Ok(Json(review))
}

/// DELETE /reviews/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    PathId(id): PathId<ReviewId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.review_service.delete(auth.id, id).await?;
    Ok(Json(MessageResponse::new("Review deleted successfully.")))
}
