//! Health check endpoints

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyResponse {
    status: &'static str,
    mongodb: bool,
}

/// Liveness probe. The published body is exactly `{"status":"ok"}`.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Readiness probe - verifies MongoDB connectivity
async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let mongodb_healthy = database::mongodb::check_health(&state.mongo_client).await;

    let status = if mongodb_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadyResponse {
            status: if mongodb_healthy { "ready" } else { "unhealthy" },
            mongodb: mongodb_healthy,
        }),
    )
}

/// Create the health check router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
