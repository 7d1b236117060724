use async_trait::async_trait;
use site_api::config::{MongoConfig, SiteConfig};
use site_api::models::{Capability, Inquiry};
use site_api::services::ContentStore;
use site_api::startup::{build_router, AppState, Application};
use site_core::error::AppError;
use std::sync::Arc;

pub fn test_config(uri: Option<String>) -> SiteConfig {
    SiteConfig {
        common: site_core::config::Config { port: 0 },
        mongodb: MongoConfig {
            uri,
            database: format!("site_test_{}", uuid::Uuid::new_v4().simple()),
        },
    }
}

/// Router wired without a store: the unconfigured-database deployment.
pub fn app_without_store() -> axum::Router {
    build_router(AppState {
        config: test_config(None),
        store: None,
    })
}

/// Router wired with the given store implementation.
pub fn app_with_store(store: Arc<dyn ContentStore>) -> axum::Router {
    build_router(AppState {
        config: test_config(None),
        store: Some(store),
    })
}

/// Store that fails every operation with the given message. Models a
/// configured-but-unreachable database.
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn err(&self) -> AppError {
        AppError::DatabaseError(anyhow::anyhow!("{}", self.message))
    }
}

#[async_trait]
impl ContentStore for FailingStore {
    async fn ping(&self) -> Result<(), AppError> {
        Err(self.err())
    }

    async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        Err(self.err())
    }

    async fn list_capabilities(&self) -> Result<Vec<Capability>, AppError> {
        Err(self.err())
    }

    async fn insert_capability(&self, _capability: &Capability) -> Result<(), AppError> {
        Err(self.err())
    }

    async fn create_inquiry(&self, _inquiry: &Inquiry) -> Result<String, AppError> {
        Err(self.err())
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Build and run a full application on a random port.
    pub async fn spawn(config: SiteConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
