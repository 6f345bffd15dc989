//! `UserDao` trait: single-statement access to the users table.
//!
//! Implementations connect directly to one data source and return rows
//! unmapped. [`UserStore`] turns them into domain values and applies the
//! failure policy.
//!
//! [`UserStore`]: crate::traits::UserStore

use async_trait::async_trait;
use bazaar_core::{BazaarResult, Role, User, UserId, UserRow};
use chrono::{DateTime, Utc};

/// Outcome of an insert as reported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    /// Rows written by the statement.
    pub rows_affected: u64,
    /// Key generated for the new row.
    pub last_insert_id: i64,
}

/// Low-level user data access object.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDao: Send + Sync {
    /// Selects every row, in store order.
    async fn fetch_all(&self) -> BazaarResult<Vec<UserRow>>;

    /// Selects one page of rows ordered by id.
    async fn fetch_page(&self, limit: i64, offset: i64) -> BazaarResult<Vec<UserRow>>;

    /// Counts all rows.
    async fn count(&self) -> BazaarResult<u64>;

    /// Selects the row with the given primary key.
    async fn fetch_by_id(&self, id: UserId) -> BazaarResult<Option<UserRow>>;

    /// Selects the row with the given email.
    async fn fetch_by_email(&self, email: &str) -> BazaarResult<Option<UserRow>>;

    /// Executes the user's own insert statement with `role` stamped in.
    async fn insert(&self, user: &User, role: Role, now: DateTime<Utc>) -> BazaarResult<InsertOutcome>;

    /// Overwrites the password and records the change as a self-update.
    /// Returns the number of rows changed.
    async fn update_password(
        &self,
        id: UserId,
        password: &str,
        now: DateTime<Utc>,
    ) -> BazaarResult<u64>;
}
