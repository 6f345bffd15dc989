//! User role value object.

use crate::BazaarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a marketplace user can hold.
///
/// Stored as the exact upper-case variant name. Parsing is strict: the store
/// never coerces unknown text into a default role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// User who lists goods for sale.
    Seller,
    /// User who purchases goods.
    Buyer,
}

impl Role {
    /// Returns the stored text form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Seller => "SELLER",
            Self::Buyer => "BUYER",
        }
    }

    /// Returns all available roles.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Admin, Self::Seller, Self::Buyer]
    }
}

impl FromStr for Role {
    type Err = BazaarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "SELLER" => Ok(Self::Seller),
            "BUYER" => Ok(Self::Buyer),
            other => Err(BazaarError::data_integrity(format!(
                "unknown role '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
