//! User directory.
//!
//! The in-memory list of user records consulted at login and extended at
//! registration. Records are only ever appended.

use chrono::Utc;
use tokio::sync::RwLock;

use prisona_core::{Email, Role, UserId};

use super::RepositoryError;
use crate::models::user::{NewUser, User};

/// Repository for user records.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: RwLock<Vec<User>>,
}

impl UserDirectory {
    /// Create a directory holding the given records.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Create a directory holding the demo accounts, one per role.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(super::fixtures::users())
    }

    /// Get the user matching both email and role.
    pub async fn get_by_email_and_role(&self, email: &Email, role: Role) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.email() == email && user.role() == role)
            .cloned()
    }

    /// Number of records.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Append a registration.
    ///
    /// The uniqueness check and the insert happen under one write lock.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists. The
    /// directory is left unchanged in that case.
    pub async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;

        if users.iter().any(|user| user.email() == &new_user.email) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        let id = users
            .iter()
            .map(User::id)
            .max()
            .map_or(UserId::new(1), |max| max.next());

        let user = User::from_registration(id, new_user, Utc::now());
        users.push(user.clone());

        tracing::debug!(user_id = %user.id(), role = %user.role(), "directory record created");

        Ok(user)
    }
}
