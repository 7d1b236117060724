use crate::models::Inquiry;
use crate::startup::AppState;
use crate::utils::truncate_chars;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use site_core::error::AppError;
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct InquiryResponse {
    pub id: String,
    pub message: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn create_inquiry(
    State(state): State<AppState>,
    Json(payload): Json<Inquiry>,
) -> Result<(StatusCode, Json<InquiryResponse>), AppError> {
    payload.validate()?;

    let store = state
        .store
        .as_deref()
        .ok_or_else(|| AppError::ServiceUnavailable("Database not available".to_string()))?;

    let id = store.create_inquiry(&payload).await.map_err(|e| {
        // Cap the underlying driver message, not the wrapped Display form
        let detail = match &e {
            AppError::DatabaseError(source) => source.to_string(),
            other => other.to_string(),
        };
        AppError::DatabaseError(anyhow::anyhow!(
            "Failed to save inquiry: {}",
            truncate_chars(&detail, 120)
        ))
    })?;

    tracing::info!(inquiry_id = %id, "Inquiry stored");

    Ok((
        StatusCode::OK,
        Json(InquiryResponse {
            id,
            message: "Inquiry received. Our team will contact you shortly.".to_string(),
        }),
    ))
}
