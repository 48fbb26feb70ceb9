//! User roles.

use serde::{Deserialize, Serialize};

/// Error returned when a role identifier is not one of the six known roles.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid role: {0}")]
pub struct RoleParseError(pub String);

/// Identity category governing which dashboard a user sees.
///
/// The serialized form (`customer`, `shop_owner`, ...) is the identifier stored
/// in the session record and accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Buys products and tracks their own orders.
    Customer,
    /// Runs a shop and lists products.
    ShopOwner,
    /// Sells produce directly.
    Farmer,
    /// Picks up and delivers orders.
    DeliveryAgent,
    /// Manages delivery agents and assignments.
    DeliveryAdmin,
    /// Oversees the whole store.
    Admin,
}

impl Role {
    /// Every role, in sidebar/menu order.
    pub const ALL: [Self; 6] = [
        Self::Customer,
        Self::ShopOwner,
        Self::Farmer,
        Self::DeliveryAgent,
        Self::DeliveryAdmin,
        Self::Admin,
    ];

    /// Stable identifier (matches the serde representation).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::ShopOwner => "shop_owner",
            Self::Farmer => "farmer",
            Self::DeliveryAgent => "delivery_agent",
            Self::DeliveryAdmin => "delivery_admin",
            Self::Admin => "admin",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::ShopOwner => "Shop Owner",
            Self::Farmer => "Farmer",
            Self::DeliveryAgent => "Delivery Agent",
            Self::DeliveryAdmin => "Delivery Admin",
            Self::Admin => "Admin",
        }
    }

    /// Whether a freshly registered account of this role is usable right away.
    ///
    /// Only customers are; every other role waits for manual approval.
    #[must_use]
    pub const fn is_self_service(self) -> bool {
        matches!(self, Self::Customer)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    /// Accepts the snake_case identifier or its kebab-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| RoleParseError(s.to_owned()))
    }
}
