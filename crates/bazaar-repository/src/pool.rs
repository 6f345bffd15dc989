//! Database connection pool management.

use bazaar_config::DatabaseConfig;
use bazaar_core::{BazaarError, BazaarResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Database pool wrapper.
///
/// Connections are checked out per statement and returned to the pool when
/// the statement future completes or is dropped.
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    pub async fn new(config: &DatabaseConfig) -> BazaarResult<Self> {
        info!("Connecting to SQLite database...");

        let mut options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| BazaarError::Configuration(format!("Invalid database URL: {}", e)))?;
        if !config.log_queries {
            options = options.disable_statement_logging();
        }

        let mut pool_options = SqlitePoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout());

        // A reaped in-memory connection takes its database with it.
        pool_options = if config.url.contains(":memory:") {
            pool_options
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            pool_options.idle_timeout(Some(config.idle_timeout()))
        };

        let pool = pool_options.connect_with(options).await.map_err(|e| {
            warn!("Failed to connect to database: {}", e);
            BazaarError::Database(format!("Failed to connect: {}", e))
        })?;

        info!("SQLite connection pool established");
        Ok(Self { pool })
    }

    /// Wraps an already configured pool.
    #[must_use]
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &SqlitePool {
        &self.pool
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> BazaarResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| BazaarError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::ops::Deref for DatabasePool {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Creates a shared database pool.
pub async fn create_pool(config: &DatabaseConfig) -> BazaarResult<std::sync::Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    Ok(std::sync::Arc::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_pool_is_healthy() {
        let pool = DatabasePool::new(&DatabaseConfig::in_memory()).await.unwrap();
        assert!(pool.health_check().await.is_ok());
        pool.close().await;
        assert!(pool.health_check().await.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_file_is_database_error() {
        let config = DatabaseConfig {
            url: "sqlite://missing-dir/nested/bazaar.db".to_string(),
            ..DatabaseConfig::in_memory()
        };
        let err = DatabasePool::new(&config).await.unwrap_err();
        assert!(matches!(err, BazaarError::Database(_)));
    }
}
