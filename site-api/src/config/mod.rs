use serde::Deserialize;
use site_core::config as core_config;
use site_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    /// Connection string; unset means the service runs without a store and
    /// serves static content only.
    pub uri: Option<String>,
    pub database: String,
}

impl SiteConfig {
    pub fn load() -> Result<Self, AppError> {
        let mut common = core_config::Config::load()?;

        // Hosting platform convention: a plain PORT variable wins over the
        // layered configuration sources.
        if let Ok(port) = env::var("PORT") {
            common.port = port.parse().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("Invalid PORT value {:?}: {}", port, e))
            })?;
        }

        Ok(SiteConfig {
            common,
            mongodb: MongoConfig {
                uri: env::var("DATABASE_URL").ok(),
                database: env::var("DATABASE_NAME")
                    .unwrap_or_else(|_| "manufacturing".to_string()),
            },
        })
    }
}
