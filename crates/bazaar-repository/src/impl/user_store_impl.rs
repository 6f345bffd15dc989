//! `UserStoreImpl`: validation, row mapping, and failure policy over a
//! [`UserDao`].
//!
//! Failure classes are kept apart:
//!
//! - invalid lookup input short-circuits to `Ok(None)` without a query;
//! - storage failures are logged here and returned as `Conflict`/`Database`;
//! - unknown role text surfaces as `DataIntegrity` and is never masked.
//!
//! [`UserDao`]: crate::dao::UserDao

use crate::dao::{InsertOutcome, SqliteUserDao, UserDao};
use crate::{traits::UserStore, DatabasePool};
use async_trait::async_trait;
use bazaar_core::{BazaarError, BazaarResult, Page, PageRequest, Role, User, UserId, UserRow};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error};

/// Store implementation that orchestrates [`UserDao`] access.
///
/// [`UserDao`]: crate::dao::UserDao
#[derive(Clone)]
pub struct UserStoreImpl {
    user_dao: Arc<dyn UserDao>,
}

impl UserStoreImpl {
    /// Creates a new `UserStoreImpl` with the given DAO.
    #[must_use]
    pub fn new(user_dao: Arc<dyn UserDao>) -> Self {
        Self { user_dao }
    }

    /// Creates a store backed by [`SqliteUserDao`] on `pool`.
    #[must_use]
    pub fn sqlite(pool: Arc<DatabasePool>) -> Self {
        Self::new(Arc::new(SqliteUserDao::new(pool)))
    }

    async fn save(&self, user: &User, role: Role) -> BazaarResult<UserId> {
        let InsertOutcome {
            rows_affected,
            last_insert_id,
        } = self
            .user_dao
            .insert(user, role, Utc::now())
            .await
            .map_err(log_storage("insert"))?;

        if rows_affected != 1 {
            error!(email = %user.email, %role, rows_affected, "insert did not write exactly one row");
            return Err(BazaarError::Database(format!(
                "insert affected {} rows",
                rows_affected
            )));
        }

        if last_insert_id <= 0 {
            error!(email = %user.email, %role, last_insert_id, "insert returned no usable key");
            return Err(BazaarError::Database(format!(
                "invalid generated key {}",
                last_insert_id
            )));
        }

        debug!(user_id = last_insert_id, %role, "user inserted");
        Ok(UserId(last_insert_id))
    }
}

/// Logs storage failures before they are returned.
fn log_storage(operation: &'static str) -> impl FnOnce(BazaarError) -> BazaarError {
    move |e| {
        if e.is_storage() {
            error!(operation, error = %e, "storage failure");
        }
        e
    }
}

fn map_row(row: Option<UserRow>) -> BazaarResult<Option<User>> {
    Ok(row.map(User::from_row).transpose()?.flatten())
}

fn map_rows(rows: Vec<UserRow>) -> BazaarResult<Vec<User>> {
    rows.into_iter()
        .map(User::from_row)
        .filter_map(Result::transpose)
        .collect()
}

#[async_trait]
impl UserStore for UserStoreImpl {
    async fn list_users(&self, page: u32, size: u32) -> BazaarResult<Vec<User>> {
        debug!(page, size, "pagination arguments are not applied; listing all users");

        let rows = self
            .user_dao
            .fetch_all()
            .await
            .map_err(log_storage("list_users"))?;

        map_rows(rows)
    }

    async fn list_users_page(&self, request: PageRequest) -> BazaarResult<Page<User>> {
        debug!(page = request.page, size = request.size, "listing users page");

        let total = self
            .user_dao
            .count()
            .await
            .map_err(log_storage("count_users"))?;
        let rows = self
            .user_dao
            .fetch_page(request.limit(), request.offset())
            .await
            .map_err(log_storage("list_users_page"))?;

        Ok(Page::new(map_rows(rows)?, request, total))
    }

    async fn count_users(&self) -> BazaarResult<u64> {
        self.user_dao
            .count()
            .await
            .map_err(log_storage("count_users"))
    }

    async fn save_seller(&self, user: &User) -> BazaarResult<UserId> {
        self.save(user, Role::Seller).await
    }

    async fn save_buyer(&self, user: &User) -> BazaarResult<UserId> {
        self.save(user, Role::Buyer).await
    }

    async fn reset_password(&self, user_id: UserId, new_password: &str) -> BazaarResult<UserId> {
        let rows = self
            .user_dao
            .update_password(user_id, new_password, Utc::now())
            .await
            .map_err(log_storage("reset_password"))?;

        match rows {
            1 => {
                debug!(%user_id, "password reset");
                Ok(user_id)
            }
            0 => Err(BazaarError::not_found("User", user_id)),
            n => {
                error!(%user_id, rows = n, "password reset touched more than one row");
                Err(BazaarError::Database(format!("update affected {} rows", n)))
            }
        }
    }

    async fn find_by_id(&self, id: Option<UserId>) -> BazaarResult<Option<User>> {
        let Some(id) = id.filter(|id| id.get() >= 0) else {
            return Ok(None);
        };

        let row = self
            .user_dao
            .fetch_by_id(id)
            .await
            .map_err(log_storage("find_by_id"))?;

        map_row(row)
    }

    async fn find_by_email(&self, email: Option<&str>) -> BazaarResult<Option<User>> {
        let Some(email) = email else {
            return Ok(None);
        };

        let row = self
            .user_dao
            .fetch_by_email(email)
            .await
            .map_err(log_storage("find_by_email"))?;

        map_row(row)
    }
}

impl std::fmt::Debug for UserStoreImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStoreImpl").finish_non_exhaustive()
    }
}
