use crate::startup::AppState;
use crate::utils::truncate_chars;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::env;

/// Diagnostic endpoint describing backend/database availability.
///
/// String-flag based and best-effort, not a strict schema; consumed by the
/// hosting platform's status page.
pub async fn test_database(State(state): State<AppState>) -> Json<Value> {
    let mut response = json!({
        "backend": "✅ Running",
        "database": "❌ Not Available",
        "database_url": env_flag("DATABASE_URL"),
        "database_name": env_flag("DATABASE_NAME"),
        "connection_status": "Not Connected",
        "collections": [],
    });

    if let Some(store) = &state.store {
        response["database"] = json!("✅ Available");
        response["connection_status"] = json!("Connected");

        match store.collection_names().await {
            Ok(mut collections) => {
                collections.truncate(10);
                response["collections"] = json!(collections);
                response["database"] = json!("✅ Connected & Working");
            }
            Err(e) => {
                response["database"] = json!(format!(
                    "⚠️  Connected but Error: {}",
                    truncate_chars(&e.to_string(), 50)
                ));
            }
        }
    }

    Json(response)
}

fn env_flag(key: &str) -> &'static str {
    if env::var(key).is_ok() {
        "✅ Set"
    } else {
        "❌ Not Set"
    }
}
