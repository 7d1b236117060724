use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check endpoint for Docker/K8s liveness probes.
///
/// Always reports ok: the service is designed to run without a store, so a
/// missing or unreachable database degrades content instead of failing the
/// probe. Store reachability is reported as a flag.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match &state.store {
        Some(store) => store.ping().await.is_ok(),
        None => false,
    };

    Json(json!({
        "status": "ok",
        "service": "site-api",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database
    }))
}

/// Readiness check endpoint for K8s readiness probes.
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}
