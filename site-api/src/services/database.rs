use crate::models::{Capability, CapabilityDocument, Inquiry, InquiryDocument};
use crate::services::ContentStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Client as MongoClient, Collection, Database};
use site_core::error::AppError;

/// MongoDB-backed [`ContentStore`].
#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    fn capabilities(&self) -> Collection<CapabilityDocument> {
        self.db.collection("capability")
    }

    fn inquiries(&self) -> Collection<InquiryDocument> {
        self.db.collection("inquiry")
    }
}

#[async_trait]
impl ContentStore for MongoStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db.list_collection_names(None).await.map_err(|e| {
            tracing::error!("Failed to list collections: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })
    }

    async fn list_capabilities(&self) -> Result<Vec<Capability>, AppError> {
        let cursor = self.capabilities().find(doc! {}, None).await.map_err(|e| {
            tracing::error!("Failed to query capabilities: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        let documents: Vec<CapabilityDocument> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect capabilities: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        Ok(documents.into_iter().map(Capability::from).collect())
    }

    async fn insert_capability(&self, capability: &Capability) -> Result<(), AppError> {
        self.capabilities()
            .insert_one(CapabilityDocument::from(capability.clone()), None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert capability: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    async fn create_inquiry(&self, inquiry: &Inquiry) -> Result<String, AppError> {
        let result = self
            .inquiries()
            .insert_one(InquiryDocument::from(inquiry.clone()), None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert inquiry: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string());
        Ok(id)
    }
}
