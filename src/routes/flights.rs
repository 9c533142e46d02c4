use axum::extract::{Query, State};
use axum::Json;
use serde_json::json;
use tracing::info;

use crate::error::ApiError;
use crate::model::SearchQuery;
use crate::state::SharedState;

/// GET /api/flights/search — proxy one search to the provider.
///
/// Provider and transport failures surface as HTTP 500 with
/// `{success:false, error}`.
pub async fn search(
    State(state): State<SharedState>,
    Query(mut query): Query<SearchQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    // Deep search gives materially better results; default it on.
    if query.deep_search.is_none() {
        query.deep_search = Some(true);
    }

    info!(
        "Flight search: {} -> {}",
        query.departure_id.as_deref().unwrap_or("?"),
        query.arrival_id.as_deref().unwrap_or("?"),
    );

    let outcome = state
        .provider
        .search_flights(&query)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    Ok(Json(json!({
        "success": true,
        "data": outcome.flights,
        "lowestPrice": outcome.lowest_price.unwrap_or(0.0),
    })))
}

/// GET /api/flights/prices — price view for the calendar, currency pinned to
/// USD. Logical failures surface as HTTP 400.
pub async fn prices(
    State(state): State<SharedState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let outcome = state
        .provider
        .flight_prices(&query)
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(Json(json!({
        "success": true,
        "data": outcome.flights,
    })))
}

/// POST /api/flights/track — same search, plus a history record. There is no
/// real price tracking behind this.
pub async fn track(
    State(state): State<SharedState>,
    Json(mut query): Json<SearchQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if query.deep_search.is_none() {
        query.deep_search = Some(true);
    }

    // The route counts as searched even if the provider call fails, matching
    // the history view's behavior.
    if let (Some(origin), Some(destination)) =
        (query.departure_id.as_deref(), query.arrival_id.as_deref())
    {
        state.history.write().await.record(origin, destination);
    }

    let outcome = state
        .provider
        .search_flights(&query)
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(Json(json!({
        "success": true,
        "data": outcome.flights,
        "lowestPrice": outcome.lowest_price.unwrap_or(0.0),
    })))
}
