use crate::models::{Capability, Inquiry, Product, User};
use axum::Json;
use schemars::schema_for;
use serde_json::{json, Value};

/// JSON Schema documents for the data model, generated from the model
/// definitions. Used by admin tooling and database viewers.
pub async fn get_schema() -> Json<Value> {
    Json(json!({
        "user": schema_for!(User),
        "product": schema_for!(Product),
        "capability": schema_for!(Capability),
        "inquiry": schema_for!(Inquiry),
    }))
}
