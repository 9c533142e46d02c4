use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::state::SharedState;

/// GET /api/flights/history — recorded routes, most-searched first.
pub async fn history(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let entries = state.history.read().await.entries();
    Json(json!({
        "success": true,
        "history": entries,
    }))
}
