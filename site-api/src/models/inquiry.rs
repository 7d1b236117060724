use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact/quote inquiry from a website visitor.
///
/// Write-only through this API: created once per submission, never mutated or
/// read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Validate)]
pub struct Inquiry {
    /// Sender name
    pub name: String,
    /// Sender email
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Message or project details
    pub message: String,
    /// Requested service/capability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

/// Stored form of [`Inquiry`] in the `inquiry` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_utc: DateTime<Utc>,
}

impl From<Inquiry> for InquiryDocument {
    fn from(inquiry: Inquiry) -> Self {
        Self {
            id: None,
            name: inquiry.name,
            email: inquiry.email,
            phone: inquiry.phone,
            company: inquiry.company,
            message: inquiry.message,
            service: inquiry.service,
            created_utc: Utc::now(),
        }
    }
}
