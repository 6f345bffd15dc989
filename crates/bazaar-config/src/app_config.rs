//! Application configuration structures.

use bazaar_core::telemetry::TelemetryConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "bazaar".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database URL.
    pub url: String,
    /// Minimum connection pool size.
    pub min_connections: u32,
    /// Maximum connection pool size.
    pub max_connections: u32,
    /// Connection acquire timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds.
    pub idle_timeout_secs: u64,
    /// Log every statement at debug level.
    pub log_queries: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://bazaar.db?mode=rwc".to_string(),
            min_connections: 1,
            max_connections: 10,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
            log_queries: false,
        }
    }
}

impl DatabaseConfig {
    /// Creates a configuration for a private in-memory database.
    ///
    /// The pool is pinned to one connection because every SQLite
    /// `:memory:` connection opens its own empty database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            min_connections: 1,
            max_connections: 1,
            ..Self::default()
        }
    }

    /// Returns the connect timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Returns the idle timeout as a Duration.
    #[must_use]
    pub const fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_defaults() {
        let config = DatabaseConfig::default();
        assert!(config.url.starts_with("sqlite:"));
        assert!(config.max_connections >= config.min_connections);
        assert_eq!(config.connect_timeout(), Duration::from_secs(30));
        assert_eq!(config.idle_timeout(), Duration::from_secs(600));
    }

    #[test]
    fn test_in_memory_uses_single_connection() {
        let config = DatabaseConfig::in_memory();
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn test_partial_database_section_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"database":{"url":"sqlite://shop.db"}}"#).unwrap();
        assert_eq!(config.database.url, "sqlite://shop.db");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.app.name, "bazaar");
    }
}
