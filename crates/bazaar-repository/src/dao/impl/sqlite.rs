//! SQLite user DAO.

use crate::dao::{InsertOutcome, UserDao};
use crate::DatabasePool;
use async_trait::async_trait;
use bazaar_core::{BazaarResult, Role, User, UserId, UserRow};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::debug;

const COLUMNS: &str = "id, name, email, password, role, created_by, updated_by, deleted_by, \
                       created_at, updated_at, deleted_at";

static SELECT_ALL: Lazy<String> =
    Lazy::new(|| format!("SELECT {} FROM {}", COLUMNS, User::TABLE_NAME));

static SELECT_PAGE: Lazy<String> = Lazy::new(|| {
    format!(
        "SELECT {} FROM {} ORDER BY id LIMIT $1 OFFSET $2",
        COLUMNS,
        User::TABLE_NAME
    )
});

static SELECT_BY_ID: Lazy<String> =
    Lazy::new(|| format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, User::TABLE_NAME));

static SELECT_BY_EMAIL: Lazy<String> =
    Lazy::new(|| format!("SELECT {} FROM {} WHERE email = $1", COLUMNS, User::TABLE_NAME));

static COUNT: Lazy<String> = Lazy::new(|| format!("SELECT COUNT(*) FROM {}", User::TABLE_NAME));

static UPDATE_PASSWORD: Lazy<String> = Lazy::new(|| {
    format!(
        "UPDATE {} SET password = $1, updated_by = $2, updated_at = $3 WHERE id = $4",
        User::TABLE_NAME
    )
});

/// SQLite-backed [`UserDao`].
#[derive(Clone)]
pub struct SqliteUserDao {
    pool: Arc<DatabasePool>,
}

impl SqliteUserDao {
    /// Creates a new DAO over the shared pool.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDao for SqliteUserDao {
    async fn fetch_all(&self) -> BazaarResult<Vec<UserRow>> {
        debug!("Selecting all users");

        let rows = sqlx::query_as::<_, UserRow>(SELECT_ALL.as_str())
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows)
    }

    async fn fetch_page(&self, limit: i64, offset: i64) -> BazaarResult<Vec<UserRow>> {
        debug!("Selecting users, limit: {}, offset: {}", limit, offset);

        let rows = sqlx::query_as::<_, UserRow>(SELECT_PAGE.as_str())
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows)
    }

    async fn count(&self) -> BazaarResult<u64> {
        let count: i64 = sqlx::query_scalar(COUNT.as_str())
            .fetch_one(self.pool.inner())
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn fetch_by_id(&self, id: UserId) -> BazaarResult<Option<UserRow>> {
        debug!("Selecting user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(SELECT_BY_ID.as_str())
            .bind(id.get())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row)
    }

    async fn fetch_by_email(&self, email: &str) -> BazaarResult<Option<UserRow>> {
        debug!("Selecting user by email: {}", email);

        let row = sqlx::query_as::<_, UserRow>(SELECT_BY_EMAIL.as_str())
            .bind(email)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row)
    }

    async fn insert(&self, user: &User, role: Role, now: DateTime<Utc>) -> BazaarResult<InsertOutcome> {
        debug!("Inserting user: {} as {}", user.email, role);

        let result = user.insert(role, now).execute(self.pool.inner()).await?;

        Ok(InsertOutcome {
            rows_affected: result.rows_affected(),
            last_insert_id: result.last_insert_rowid(),
        })
    }

    async fn update_password(
        &self,
        id: UserId,
        password: &str,
        now: DateTime<Utc>,
    ) -> BazaarResult<u64> {
        debug!("Updating password for user: {}", id);

        let result = sqlx::query(UPDATE_PASSWORD.as_str())
            .bind(password)
            .bind(id.get())
            .bind(now)
            .bind(id.get())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected())
    }
}

impl std::fmt::Debug for SqliteUserDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteUserDao").finish_non_exhaustive()
    }
}
