use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;

use crate::alerts::NewAlert;
use crate::error::ApiError;
use crate::state::SharedState;

/// GET /api/alerts
pub async fn list(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let alerts = state.alerts.read().await.all().to_vec();
    Json(json!({
        "success": true,
        "alerts": alerts,
    }))
}

/// POST /api/alerts
pub async fn create(
    State(state): State<SharedState>,
    Json(new): Json<NewAlert>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if new.origin.is_empty() || new.destination.is_empty() {
        return Err(ApiError::BadRequest(
            "origin and destination are required".to_string(),
        ));
    }
    if new.target_price <= 0.0 {
        return Err(ApiError::BadRequest(
            "targetPrice must be positive".to_string(),
        ));
    }

    let alert = state.alerts.write().await.add(new);
    Ok(Json(json!({
        "success": true,
        "alert": alert,
    })))
}

/// POST /api/alerts/{id}/toggle
pub async fn toggle(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.alerts.write().await.toggle(&id) {
        Some(alert) => Ok(Json(json!({ "success": true, "alert": alert }))),
        None => Err(ApiError::NotFound(format!("No alert with id {id}"))),
    }
}

/// DELETE /api/alerts/{id}
pub async fn remove(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if state.alerts.write().await.remove(&id) {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(ApiError::NotFound(format!("No alert with id {id}")))
    }
}
