use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

pub fn build_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Liveness
        .route("/health", get(crate::routes::health::health))
        // Flight search proxy
        .route("/api/flights/search", get(crate::routes::flights::search))
        .route("/api/flights/prices", get(crate::routes::flights::prices))
        .route("/api/flights/track", post(crate::routes::flights::track))
        // Derived views
        .route(
            "/api/flights/calendar",
            get(crate::routes::calendar::calendar),
        )
        .route(
            "/api/flights/history",
            get(crate::routes::history::history),
        )
        .route("/api/airports", get(crate::routes::airports::airports))
        // Booking continuation
        .route("/api/booking/options", get(crate::routes::booking::options))
        // Price alerts
        .route(
            "/api/alerts",
            get(crate::routes::alerts::list).post(crate::routes::alerts::create),
        )
        .route("/api/alerts/{id}", delete(crate::routes::alerts::remove))
        .route(
            "/api/alerts/{id}/toggle",
            post(crate::routes::alerts::toggle),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
