//! Common test infrastructure for database integration tests.

use bazaar_config::DatabaseConfig;
use bazaar_repository::DatabasePool;
use std::sync::Arc;

const USERS_TABLE: &str = r#"
CREATE TABLE users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    role TEXT NOT NULL,
    created_by INTEGER,
    updated_by INTEGER,
    deleted_by INTEGER,
    created_at TEXT,
    updated_at TEXT,
    deleted_at TEXT
)
"#;

/// Test database wrapper.
///
/// Each instance owns a private in-memory SQLite database with the users
/// table created.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh, empty database.
    pub async fn new() -> Self {
        let pool = DatabasePool::new(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to open in-memory database");

        sqlx::query(USERS_TABLE)
            .execute(pool.inner())
            .await
            .expect("Failed to create users table");

        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Inserts a row as-is, bypassing the store.
    ///
    /// Used to plant data the store itself would never write.
    pub async fn insert_raw(
        &self,
        email: &str,
        role: &str,
        created_at: Option<&str>,
        deleted_at: Option<&str>,
    ) -> i64 {
        sqlx::query(
            r#"
            INSERT INTO users (name, email, password, role, created_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind("Raw User")
        .bind(email)
        .bind("raw_hash")
        .bind(role)
        .bind(created_at)
        .bind(deleted_at)
        .execute(self.pool.inner())
        .await
        .expect("Failed to insert raw row")
        .last_insert_rowid()
    }

    /// Counts rows in the users table.
    pub async fn count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.inner())
            .await
            .expect("Failed to count users")
    }
}
