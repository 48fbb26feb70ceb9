//! User domain types.
//!
//! A user's role is carried by [`RoleProfile`], which holds exactly the
//! attributes that role has. There is no way to change the profile variant of
//! an existing [`User`], so the role is fixed at creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use prisona_core::{Email, Role, UserId};

/// Role plus the attributes specific to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum RoleProfile {
    Customer,
    ShopOwner {
        shop_name: String,
    },
    Farmer {
        farm_location: String,
    },
    DeliveryAgent {
        is_available: bool,
    },
    DeliveryAdmin,
    Admin,
}

impl RoleProfile {
    /// The role this profile belongs to.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Customer => Role::Customer,
            Self::ShopOwner { .. } => Role::ShopOwner,
            Self::Farmer { .. } => Role::Farmer,
            Self::DeliveryAgent { .. } => Role::DeliveryAgent,
            Self::DeliveryAdmin => Role::DeliveryAdmin,
            Self::Admin => Role::Admin,
        }
    }

    /// Name of the first required role attribute that is blank, if any.
    fn missing_field(&self) -> Option<&'static str> {
        match self {
            Self::ShopOwner { shop_name } if shop_name.trim().is_empty() => Some("shop_name"),
            Self::Farmer { farm_location } if farm_location.trim().is_empty() => {
                Some("farm_location")
            }
            _ => None,
        }
    }
}

/// A directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: Email,
    phone: Option<String>,
    #[serde(flatten)]
    profile: RoleProfile,
    is_approved: bool,
    created_at: DateTime<Utc>,
}

impl User {
    /// Materialize a registration into a directory record.
    ///
    /// Approval follows the role: customers are approved immediately, everyone
    /// else starts unapproved.
    #[must_use]
    pub fn from_registration(id: UserId, new_user: NewUser, created_at: DateTime<Utc>) -> Self {
        let is_approved = new_user.profile.role().is_self_service();
        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            phone: new_user.phone,
            profile: new_user.profile,
            is_approved,
            created_at,
        }
    }

    /// Build a pre-approved record (directory fixtures).
    #[must_use]
    pub fn seeded(id: UserId, new_user: NewUser, created_at: DateTime<Utc>) -> Self {
        Self {
            is_approved: true,
            ..Self::from_registration(id, new_user, created_at)
        }
    }

    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    #[must_use]
    pub const fn profile(&self) -> &RoleProfile {
        &self.profile
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.profile.role()
    }

    #[must_use]
    pub const fn is_approved(&self) -> bool {
        self.is_approved
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Registration form data, one constructor per role.
///
/// ```
/// use prisona_core::{Email, Role};
/// use prisona_storefront::models::NewUser;
///
/// let email = Email::parse("fresh@farm.in").unwrap();
/// let farmer = NewUser::farmer("Ravi", email, "Nashik");
/// assert_eq!(farmer.role(), Role::Farmer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub profile: RoleProfile,
}

impl NewUser {
    fn with_profile(name: impl Into<String>, email: Email, profile: RoleProfile) -> Self {
        Self {
            name: name.into(),
            email,
            phone: None,
            profile,
        }
    }

    #[must_use]
    pub fn customer(name: impl Into<String>, email: Email) -> Self {
        Self::with_profile(name, email, RoleProfile::Customer)
    }

    #[must_use]
    pub fn shop_owner(name: impl Into<String>, email: Email, shop_name: impl Into<String>) -> Self {
        Self::with_profile(
            name,
            email,
            RoleProfile::ShopOwner {
                shop_name: shop_name.into(),
            },
        )
    }

    #[must_use]
    pub fn farmer(name: impl Into<String>, email: Email, farm_location: impl Into<String>) -> Self {
        Self::with_profile(
            name,
            email,
            RoleProfile::Farmer {
                farm_location: farm_location.into(),
            },
        )
    }

    /// New delivery agents start out available.
    #[must_use]
    pub fn delivery_agent(name: impl Into<String>, email: Email) -> Self {
        Self::with_profile(
            name,
            email,
            RoleProfile::DeliveryAgent { is_available: true },
        )
    }

    #[must_use]
    pub fn delivery_admin(name: impl Into<String>, email: Email) -> Self {
        Self::with_profile(name, email, RoleProfile::DeliveryAdmin)
    }

    #[must_use]
    pub fn admin(name: impl Into<String>, email: Email) -> Self {
        Self::with_profile(name, email, RoleProfile::Admin)
    }

    /// Attach an optional phone number; blank input is dropped.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        let phone = phone.into();
        self.phone = (!phone.trim().is_empty()).then(|| phone.trim().to_owned());
        self
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.profile.role()
    }

    /// Name of the first required field left blank, if any.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("name");
        }
        self.profile.missing_field()
    }
}
