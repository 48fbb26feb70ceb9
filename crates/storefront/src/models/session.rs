//! Session-related types.
//!
//! Types stored in local storage for authentication state.

use serde::{Deserialize, Serialize};

use prisona_core::{Email, Role, UserId};

use super::user::{RoleProfile, User};

/// Session-stored user identity.
///
/// A snapshot of the directory record taken at sign-in. It is not refreshed
/// afterwards and carries no token or expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Directory ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Sign-in email.
    pub email: Email,
    /// Role and role-specific attributes.
    #[serde(flatten)]
    pub profile: RoleProfile,
    /// Approval flag at sign-in time.
    pub is_approved: bool,
}

impl CurrentUser {
    /// The signed-in role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.profile.role()
    }
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_owned(),
            email: user.email().clone(),
            profile: user.profile().clone(),
            is_approved: user.is_approved(),
        }
    }
}

/// Local storage keys.
pub mod keys {
    /// Key holding the serialized [`super::CurrentUser`].
    pub const CURRENT_USER: &str = "prisona.session";
}
