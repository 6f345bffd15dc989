//! Store trait definitions.

use async_trait::async_trait;
use bazaar_core::{BazaarResult, Page, PageRequest, User, UserId};

/// User store: the entity operations exposed to callers.
///
/// Write operations return an error instead of a zero sentinel; use
/// [`Sentinel::or_zero`](bazaar_core::Sentinel::or_zero) where only
/// success or failure matters.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Lists every user in store order.
    ///
    /// `page` and `size` are accepted but not applied: the whole table is
    /// returned. Use [`list_users_page`](Self::list_users_page) for real
    /// pagination.
    ///
    /// Rows share the lookup mapping, so a row whose key is not positive is
    /// left out of the result.
    async fn list_users(&self, page: u32, size: u32) -> BazaarResult<Vec<User>>;

    /// Lists one page of users ordered by id.
    async fn list_users_page(&self, request: PageRequest) -> BazaarResult<Page<User>>;

    /// Counts all users, including soft-deleted ones.
    async fn count_users(&self) -> BazaarResult<u64>;

    /// Inserts `user` as a seller and returns the generated id.
    async fn save_seller(&self, user: &User) -> BazaarResult<UserId>;

    /// Inserts `user` as a buyer and returns the generated id.
    async fn save_buyer(&self, user: &User) -> BazaarResult<UserId>;

    /// Replaces the stored password hash of `user_id` and returns `user_id`.
    async fn reset_password(&self, user_id: UserId, new_password: &str) -> BazaarResult<UserId>;

    /// Finds a user by id. `None` or a negative id is "not found".
    async fn find_by_id(&self, id: Option<UserId>) -> BazaarResult<Option<User>>;

    /// Finds a user by email. `None` is "not found".
    async fn find_by_email(&self, email: Option<&str>) -> BazaarResult<Option<User>>;
}
