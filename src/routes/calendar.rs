use axum::extract::Query;
use axum::Json;
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use crate::calendar::synthesize_calendar;
use crate::catalog;
use crate::error::ApiError;

#[derive(Deserialize)]
pub struct CalendarQuery {
    pub departure_id: Option<String>,
    pub arrival_id: Option<String>,
}

/// GET /api/flights/calendar — simulated 60-day price distribution for a
/// route, seeded from the sample schedule. Routes without sample coverage
/// yield an empty day list.
pub async fn calendar(
    Query(query): Query<CalendarQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Some(origin) = query.departure_id.filter(|s| !s.is_empty()) else {
        return Err(ApiError::MissingParameter("departure_id is required"));
    };
    let Some(destination) = query.arrival_id.filter(|s| !s.is_empty()) else {
        return Err(ApiError::MissingParameter("arrival_id is required"));
    };

    let base = catalog::sample_flights();
    let today = Local::now().date_naive();
    let days = synthesize_calendar(
        &origin,
        &destination,
        &base,
        today,
        &mut rand::thread_rng(),
    );

    Ok(Json(json!({
        "success": true,
        "days": days,
    })))
}
