//! Store implementations.
//!
//! Trait definitions live in the parent module (`traits.rs`).

pub mod user_store_impl;

pub use user_store_impl::UserStoreImpl;
