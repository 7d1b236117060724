//! Schema-registry models.
//!
//! These are not served by any content endpoint yet; they are published via
//! `GET /schema` so admin tooling and database viewers can validate documents
//! in the corresponding collections.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Website user account.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct User {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Address
    pub address: String,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 120))]
    pub age: Option<u32>,
    /// Whether user is active
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Product {
    /// Product title
    pub title: String,
    /// Product description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in dollars
    #[schemars(range(min = 0.0))]
    pub price: f64,
    /// Product category
    pub category: String,
    /// Whether product is in stock
    #[serde(default = "default_true")]
    pub in_stock: bool,
}
