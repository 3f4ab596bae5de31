//! Account handlers: register, login and the caller's own profile.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::dto::response::{AuthResponse, ProfileResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidJson};
use crate::state::AppState;

/// POST /users/register
pub async fn register(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let session = state
        .user_service
        .register(
            req.username.as_deref().unwrap_or_default(),
            req.email.as_deref().unwrap_or_default(),
            req.password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(session.into())))
}

/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let session = state
        .user_service
        .login(
            req.email.as_deref().unwrap_or_default(),
            req.password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(session.into()))
}

/// GET /users/me
pub async fn me(auth: AuthUser) -> Json<ProfileResponse> {
    Json(auth.0.into())
}

/// PUT /users/me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let identity = state
        .user_service
        .update_profile(auth.identity(), req.into())
        .await?;

    Ok(Json(identity.into()))
}
