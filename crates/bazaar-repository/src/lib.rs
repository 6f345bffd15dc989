//! # Bazaar Repository
//!
//! Three-layer data access for the user entity:
//!
//! ```text
//! Caller
//!   ↓  Arc<dyn UserStore>   (store interface: validation, mapping, failure policy)
//! UserStoreImpl
//!   ↓  Arc<dyn UserDao>     (one statement per call, unmapped rows)
//! SqliteUserDao
//!   ↓
//! SQLite
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                 ← UserStore trait
//!   impl/
//!     user_store_impl.rs      ← UserStoreImpl
//!   dao/
//!     user_dao.rs             ← UserDao trait
//!     impl/
//!       sqlite.rs             ← SqliteUserDao
//!   pool.rs                   ← DatabasePool
//! ```

pub mod dao;
pub mod pool;
pub mod traits;
pub mod r#impl;

pub use dao::{InsertOutcome, SqliteUserDao, UserDao};
pub use pool::*;
pub use r#impl::UserStoreImpl;
pub use traits::*;
