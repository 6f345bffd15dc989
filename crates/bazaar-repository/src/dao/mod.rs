//! DAO (Data Access Object) layer.
//!
//! A DAO issues exactly one statement per call and hands back raw rows.
//! Mapping and the failure policy live one layer up, in the store.

pub mod r#impl;
pub mod user_dao;

pub use r#impl::SqliteUserDao;
pub use user_dao::{InsertOutcome, UserDao};

#[cfg(test)]
pub use user_dao::MockUserDao;
