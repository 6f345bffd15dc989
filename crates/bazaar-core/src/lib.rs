//! # Bazaar Core
//!
//! Core types, domain model, and error definitions for the Bazaar user store.
//! The repository and config crates build on the abstractions defined here.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod telemetry;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
