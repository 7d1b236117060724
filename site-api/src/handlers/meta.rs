use axum::Json;
use serde_json::{json, Value};

pub async fn read_root() -> Json<Value> {
    Json(json!({ "message": "Manufacturing API is running" }))
}

pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from the backend API!" }))
}
