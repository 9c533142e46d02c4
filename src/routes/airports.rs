use axum::Json;
use serde_json::json;

use crate::catalog::AIRPORTS;

/// GET /api/airports — static catalog backing the search form.
pub async fn airports() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "airports": AIRPORTS,
    }))
}
