//! DAO implementations, organized by backend.

mod sqlite;

pub use sqlite::SqliteUserDao;
