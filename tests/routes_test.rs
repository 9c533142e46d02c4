use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::util::ServiceExt;

use farefinder::config::AppConfig;
use farefinder::server::build_router;
use farefinder::state::AppState;

/// Router wired to an unreachable provider endpoint, so every provider call
/// fails at the transport layer.
fn test_router() -> Router {
    let config = AppConfig {
        port: 0,
        api_key: "test-key".to_string(),
        provider_url: "http://127.0.0.1:9/search.json".to_string(),
    };
    build_router(Arc::new(AppState::new(config)))
}

async fn get(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

async fn post_json(router: &Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}

#[tokio::test]
async fn test_health_reports_ok() {
    let (status, body) = get(&test_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_search_maps_transport_failure_to_500() {
    let (status, body) = get(
        &test_router(),
        "/api/flights/search?departure_id=JFK&arrival_id=LAX&outbound_date=2025-07-20&type=2",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap();
    assert!(!error.is_empty());
}

#[tokio::test]
async fn test_prices_maps_failure_to_400() {
    let (status, body) = get(
        &test_router(),
        "/api/flights/prices?departure_id=JFK&arrival_id=LAX",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_booking_options_requires_all_parameters() {
    let router = test_router();

    // arrival_id missing
    let (status, body) = get(
        &router,
        "/api/booking/options?booking_token=tok&departure_id=JFK&outbound_date=2025-07-20",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing required booking parameters.");

    // empty values count as missing
    let (status, _) = get(
        &router,
        "/api/booking/options?booking_token=&departure_id=JFK&arrival_id=LAX&outbound_date=2025-07-20",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // all four present: passes validation, fails at the unreachable provider
    let (status, body) = get(
        &router,
        "/api/booking/options?booking_token=tok&departure_id=JFK&arrival_id=LAX&outbound_date=2025-07-20",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_airports_catalog_is_served() {
    let (status, body) = get(&test_router(), "/api/airports").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let airports = body["airports"].as_array().unwrap();
    assert!(!airports.is_empty());
    assert!(airports.iter().any(|a| a["code"] == "JFK"));
}

#[tokio::test]
async fn test_calendar_requires_route_parameters() {
    let router = test_router();

    let (status, body) = get(&router, "/api/flights/calendar?arrival_id=LAX").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = get(&router, "/api/flights/calendar?departure_id=JFK").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_calendar_synthesizes_days_for_sample_route() {
    let (status, body) = get(
        &test_router(),
        "/api/flights/calendar?departure_id=JFK&arrival_id=LAX",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 60);
    assert_eq!(days[0]["isToday"], true);
    assert!(days[0]["price"].as_u64().unwrap() > 0);
    assert!(!days[0]["flights"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_calendar_empty_for_unknown_route() {
    let (status, body) = get(
        &test_router(),
        "/api/flights/calendar?departure_id=JFK&arrival_id=JAC",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["days"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_track_records_history_even_when_provider_is_down() {
    let router = test_router();

    let (status, body) = post_json(
        &router,
        "/api/flights/track",
        r#"{"departure_id":"JFK","arrival_id":"LAX","outbound_date":"2025-07-20"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, body) = get(&router, "/api/flights/history").await;
    assert_eq!(status, StatusCode::OK);
    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["origin"], "JFK");
    assert_eq!(history[0]["destination"], "LAX");
    assert_eq!(history[0]["searchCount"], 1);
}

#[tokio::test]
async fn test_repeat_tracking_bumps_search_count() {
    let router = test_router();
    let body = r#"{"departure_id":"BOS","arrival_id":"MIA"}"#;

    post_json(&router, "/api/flights/track", body).await;
    post_json(&router, "/api/flights/track", body).await;

    let (_, response) = get(&router, "/api/flights/history").await;
    let history = response["history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["searchCount"], 2);
}

#[tokio::test]
async fn test_alert_lifecycle() {
    let router = test_router();

    // Create
    let (status, body) = post_json(
        &router,
        "/api/alerts",
        r#"{"origin":"JFK","destination":"LAX","targetPrice":250}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let id = body["alert"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["alert"]["isActive"], true);
    assert!(body["alert"]["currentPrice"].as_f64().unwrap() >= 100.0);
    assert_eq!(body["alert"]["preferences"]["maxStops"], 2);

    // List
    let (_, body) = get(&router, "/api/alerts").await;
    assert_eq!(body["alerts"].as_array().unwrap().len(), 1);

    // Toggle
    let (status, body) = post_json(&router, &format!("/api/alerts/{id}/toggle"), "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["alert"]["isActive"], false);

    // Remove
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/alerts/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (_, body) = get(&router, "/api/alerts").await;
    assert!(body["alerts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_alert_validation_and_missing_ids() {
    let router = test_router();

    let (status, body) = post_json(
        &router,
        "/api/alerts",
        r#"{"origin":"","destination":"LAX","targetPrice":250}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = post_json(
        &router,
        "/api/alerts",
        r#"{"origin":"JFK","destination":"LAX","targetPrice":0}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post_json(&router, "/api/alerts/no-such-id/toggle", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}
