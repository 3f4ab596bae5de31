//! Health check handler.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = match state.stores.health.ping().await {
        Ok(true) => "ok",
        Ok(false) => "unavailable",
        Err(e) => {
            warn!(error = %e, "Store health probe failed");
            "unavailable"
        }
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: store.to_string(),
    })
}
