//! Result type aliases for the Bazaar user store.

use crate::{BazaarError, UserId};
use tracing::debug;

/// A specialized `Result` type for Bazaar operations.
pub type BazaarResult<T> = Result<T, BazaarError>;

/// Collapses a write result into the legacy id-or-zero convention.
///
/// Callers that only care about success or failure can keep treating `0` as
/// "operation failed, reason unknown". The cause is lost here, so it is
/// logged before being dropped.
pub trait Sentinel {
    /// Returns the id on success and `0` on any failure.
    fn or_zero(self) -> i64;
}

impl Sentinel for BazaarResult<UserId> {
    fn or_zero(self) -> i64 {
        match self {
            Ok(id) => id.get(),
            Err(e) => {
                debug!(error = %e, code = e.error_code(), "collapsing failure to zero");
                0
            }
        }
    }
}
