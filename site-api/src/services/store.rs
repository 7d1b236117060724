use crate::models::{Capability, Inquiry};
use async_trait::async_trait;
use site_core::error::AppError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Read/write surface of the persistent content store.
///
/// Injected at startup as `Option<Arc<dyn ContentStore>>`: `None` models the
/// unconfigured deployment, where read endpoints serve static content and the
/// inquiry endpoint fails with 503.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;

    async fn collection_names(&self) -> Result<Vec<String>, AppError>;

    /// All capability records in the store's natural (insertion) order.
    async fn list_capabilities(&self) -> Result<Vec<Capability>, AppError>;

    async fn insert_capability(&self, capability: &Capability) -> Result<(), AppError>;

    /// Persist an inquiry and return its assigned identifier.
    async fn create_inquiry(&self, inquiry: &Inquiry) -> Result<String, AppError>;
}

/// In-process store used by tests and local runs without MongoDB.
#[derive(Default)]
pub struct MemoryStore {
    capabilities: Mutex<Vec<Capability>>,
    inquiries: Mutex<HashMap<String, Inquiry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored inquiry by the id returned on creation.
    pub fn inquiry(&self, id: &str) -> Option<Inquiry> {
        self.inquiries.lock().unwrap().get(id).cloned()
    }

    pub fn capability_count(&self) -> usize {
        self.capabilities.lock().unwrap().len()
    }

    pub fn inquiry_count(&self) -> usize {
        self.inquiries.lock().unwrap().len()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        let mut names = Vec::new();
        if !self.capabilities.lock().unwrap().is_empty() {
            names.push("capability".to_string());
        }
        if !self.inquiries.lock().unwrap().is_empty() {
            names.push("inquiry".to_string());
        }
        Ok(names)
    }

    async fn list_capabilities(&self) -> Result<Vec<Capability>, AppError> {
        Ok(self.capabilities.lock().unwrap().clone())
    }

    async fn insert_capability(&self, capability: &Capability) -> Result<(), AppError> {
        self.capabilities.lock().unwrap().push(capability.clone());
        Ok(())
    }

    async fn create_inquiry(&self, inquiry: &Inquiry) -> Result<String, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        self.inquiries
            .lock()
            .unwrap()
            .insert(id.clone(), inquiry.clone());
        Ok(id)
    }
}
