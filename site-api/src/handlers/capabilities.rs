use crate::models::Capability;
use crate::services::resolve_capabilities;
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Public capability listing.
///
/// Store errors never surface here; the resolver degrades to static defaults
/// and may lazily seed an empty store.
pub async fn list_capabilities(State(state): State<AppState>) -> Json<Vec<Capability>> {
    Json(resolve_capabilities(state.store.as_deref()).await)
}
