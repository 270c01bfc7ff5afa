//! Liveness, readiness and build info.

use crate::state::AppState;
use crate::store;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

async fn health() -> Response {
    Json(json!({ "status": "ok" })).into_response()
}

/// 200 when the database answers, 503 with `"degraded"` otherwise.
async fn ready(State(state): State<AppState>) -> Response {
    let (status, overall, database) = match store::ping(&state.pool).await {
        Ok(()) => (StatusCode::OK, "ok", "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "database did not answer readiness check");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };
    (status, Json(json!({ "status": overall, "database": database }))).into_response()
}

async fn version() -> Response {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
    .into_response()
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
