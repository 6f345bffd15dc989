//! User entity and its relational row form.

use crate::domain::value_objects::Role;
use crate::{BazaarResult, UserId};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "sqlx")]
static INSERT_SQL: once_cell::sync::Lazy<String> = once_cell::sync::Lazy::new(|| {
    format!(
        "INSERT INTO {} (name, email, password, role, created_by, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6)",
        User::TABLE_NAME
    )
});

/// A marketplace user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-generated key; `0` until the user has been inserted.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Unique business key among active users.
    pub email: String,

    /// Password hash produced upstream (never exposed via serialization).
    #[serde(skip_serializing)]
    pub password: String,

    /// User's role.
    pub role: Role,

    /// User that created this record.
    pub created_by: Option<UserId>,

    /// User that last updated this record.
    pub updated_by: Option<UserId>,

    /// User that soft-deleted this record.
    pub deleted_by: Option<UserId>,

    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,

    /// Soft-delete marker; `None` while the record is active.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Table holding user rows.
    pub const TABLE_NAME: &'static str = "users";

    /// Creates an unsaved user. `password` must already be hashed.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: UserId(0),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role,
            created_by: None,
            updated_by: None,
            deleted_by: None,
            created_at: None,
            updated_at: None,
            deleted_at: None,
        }
    }

    /// Records which user is creating this one.
    #[must_use]
    pub fn with_creator(mut self, creator: UserId) -> Self {
        self.created_by = Some(creator);
        self
    }

    /// Checks if the user has been assigned a store key.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_persisted()
    }

    /// Checks if the user has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Maps a raw row onto the domain type.
    ///
    /// A row whose key is not positive yields `Ok(None)`. Timestamps are
    /// normalized to UTC and SQL-NULL stays `None`. Role text that is not a
    /// known [`Role`] is a [`BazaarError::DataIntegrity`] failure.
    ///
    /// [`BazaarError::DataIntegrity`]: crate::BazaarError::DataIntegrity
    pub fn from_row(row: UserRow) -> BazaarResult<Option<Self>> {
        if row.id <= 0 {
            return Ok(None);
        }

        let role = row.role.parse::<Role>().map_err(|e| {
            tracing::error!(user_id = row.id, role = %row.role, "stored role is not recognised");
            e
        })?;

        Ok(Some(Self {
            id: UserId(row.id),
            name: row.name,
            email: row.email,
            password: row.password,
            role,
            created_by: row.created_by.map(UserId),
            updated_by: row.updated_by.map(UserId),
            deleted_by: row.deleted_by.map(UserId),
            created_at: row.created_at.map(to_utc),
            updated_at: row.updated_at.map(to_utc),
            deleted_at: row.deleted_at.map(to_utc),
        }))
    }

    /// Builds the insert statement for this user.
    ///
    /// The role is stamped by the caller so that seller and buyer insert
    /// paths stay distinct; `self.role` and `self.id` are not written.
    #[cfg(feature = "sqlx")]
    #[must_use]
    pub fn insert(
        &self,
        role: Role,
        now: DateTime<Utc>,
    ) -> sqlx::query::Query<'_, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'_>> {
        sqlx::query(INSERT_SQL.as_str())
        .bind(self.name.as_str())
        .bind(self.email.as_str())
        .bind(self.password.as_str())
        .bind(role.as_str())
        .bind(self.created_by.map(UserId::get))
        .bind(now)
    }
}

fn to_utc(ts: DateTime<FixedOffset>) -> DateTime<Utc> {
    ts.with_timezone(&Utc)
}

/// Database row representation of a user.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub deleted_by: Option<i64>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
    pub deleted_at: Option<DateTime<FixedOffset>>,
}
