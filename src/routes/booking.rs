use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct BookingOptionsQuery {
    pub booking_token: Option<String>,
    pub departure_id: Option<String>,
    pub arrival_id: Option<String>,
    pub outbound_date: Option<String>,
}

/// GET /api/booking/options — OTA/airline offers for a booking token. All
/// four parameters are mandatory.
pub async fn options(
    State(state): State<SharedState>,
    Query(query): Query<BookingOptionsQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (Some(booking_token), Some(departure_id), Some(arrival_id), Some(outbound_date)) = (
        present(query.booking_token),
        present(query.departure_id),
        present(query.arrival_id),
        present(query.outbound_date),
    ) else {
        return Err(ApiError::MissingParameter(
            "Missing required booking parameters.",
        ));
    };

    let options = state
        .provider
        .booking_options(&booking_token, &departure_id, &arrival_id, &outbound_date)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    Ok(Json(json!({
        "success": true,
        "options": options,
    })))
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
