use mongodb::bson::oid::ObjectId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Manufacturing capability or service offered, displayed on the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Capability {
    /// Capability name, e.g. CNC Machining
    pub name: String,
    /// Short description of the capability
    pub summary: String,
    /// Optional icon name for UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Capability {
    pub fn new(name: &str, summary: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            summary: summary.to_string(),
            icon: Some(icon.to_string()),
        }
    }
}

/// Stored form of [`Capability`] in the `capability` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl From<Capability> for CapabilityDocument {
    fn from(capability: Capability) -> Self {
        Self {
            id: None,
            name: capability.name,
            summary: capability.summary,
            icon: capability.icon,
        }
    }
}

impl From<CapabilityDocument> for Capability {
    fn from(document: CapabilityDocument) -> Self {
        Self {
            name: document.name,
            summary: document.summary,
            icon: document.icon,
        }
    }
}
