//! Liveness/readiness handler.

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /health
///
/// Returns 200 with a status document when the service and its database
/// are reachable.
pub async fn health(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    hrx_db::health_check(&state.pool).await?;
    Ok(Json(json!({
        "status": "ok",
        "database": "up",
    })))
}
