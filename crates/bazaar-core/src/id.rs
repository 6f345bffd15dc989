//! Typed ID wrapper for the user entity.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for store-generated user IDs.
///
/// Persisted users always carry a positive id; `0` and negative values never
/// identify a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Returns the raw key.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether the id can refer to a stored row.
    #[must_use]
    pub const fn is_persisted(self) -> bool {
        self.0 > 0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_persisted() {
        assert!(UserId::from(1).is_persisted());
        assert!(!UserId::from(0).is_persisted());
        assert!(!UserId::from(-3).is_persisted());
    }

    #[test]
    fn test_user_id_serializes_transparently() {
        let json = serde_json::to_string(&UserId(17)).unwrap();
        assert_eq!(json, "17");
    }
}
