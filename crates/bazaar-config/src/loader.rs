//! Configuration loader with layered sources.

use crate::AppConfig;
use bazaar_core::BazaarError;
use config::{Config, ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Configuration loader with runtime refresh support.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `{config_dir}/default.toml` - Default values
    /// 2. `{config_dir}/{environment}.toml` - Environment-specific overrides
    /// 3. `{config_dir}/local.toml` - Local overrides
    /// 4. Environment variables such as `BAZAAR__DATABASE__URL`
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self, BazaarError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, BazaarError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    ///
    /// The previous configuration stays in place if the new one fails to
    /// load or validate.
    pub async fn reload(&self) -> Result<(), BazaarError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Gets a specific configuration value by dotted key path.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let config = self.config.read().await;
        let json = serde_json::to_value(&*config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }

    fn load_config(config_dir: &Path) -> Result<AppConfig, BazaarError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("BAZAAR_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = config_dir.join(format!("{}.toml", name));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("BAZAAR")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_bazaar_error)?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_bazaar_error)?;
        app_config.app.environment = environment;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    fn validate_config(config: &AppConfig) -> Result<(), BazaarError> {
        let database = &config.database;

        if database.url.trim().is_empty() {
            return Err(BazaarError::Configuration("Database URL is required".to_string()));
        }

        if database.max_connections == 0 {
            return Err(BazaarError::Configuration(
                "database.max_connections must be at least 1".to_string(),
            ));
        }

        if database.min_connections > database.max_connections {
            return Err(BazaarError::Configuration(format!(
                "database.min_connections ({}) exceeds max_connections ({})",
                database.min_connections, database.max_connections
            )));
        }

        if database.url.contains(":memory:") && database.max_connections > 1 {
            warn!("In-memory SQLite with more than one connection gives each connection its own database");
        }

        Ok(())
    }
}

fn config_error_to_bazaar_error(err: ConfigError) -> BazaarError {
    BazaarError::Configuration(err.to_string())
}
