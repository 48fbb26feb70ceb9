//! Session store.
//!
//! Holds at most one signed-in identity and mirrors it into [`LocalStorage`]
//! under [`keys::CURRENT_USER`] so it survives a restart. There is no expiry,
//! refresh or integrity check: whatever parses is trusted.

pub mod storage;

pub use storage::{FileStorage, LocalStorage, MemoryStorage, StorageError};

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::session::{CurrentUser, keys};

/// The current session.
#[derive(Debug)]
pub struct SessionStore {
    current: RwLock<Option<CurrentUser>>,
    storage: Arc<dyn LocalStorage>,
}

impl SessionStore {
    /// Create a store, restoring any session saved in `storage`.
    ///
    /// Unreadable or unparseable saved state is logged and treated as no
    /// session.
    #[must_use]
    pub fn restore(storage: Arc<dyn LocalStorage>) -> Self {
        let current = match storage.get_item(keys::CURRENT_USER) {
            Ok(Some(raw)) => match serde_json::from_str::<CurrentUser>(&raw) {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, role = %user.role(), "session restored");
                    Some(user)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unparseable saved session");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "could not read saved session");
                None
            }
        };

        Self {
            current: RwLock::new(current),
            storage,
        }
    }

    /// A store with no saved state, backed by process memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::restore(Arc::new(MemoryStorage::new()))
    }

    /// The signed-in user, if any.
    pub async fn current(&self) -> Option<CurrentUser> {
        self.current.read().await.clone()
    }

    /// Start a session for `user`, replacing any existing one.
    ///
    /// The in-memory session only changes once the saved copy is written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the session cannot be written to storage;
    /// the previous session stays current.
    pub async fn begin(&self, user: CurrentUser) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(&user)?;
        let mut current = self.current.write().await;
        self.storage.set_item(keys::CURRENT_USER, &serialized)?;
        *current = Some(user);
        Ok(())
    }

    /// End the session and remove the saved copy.
    ///
    /// The in-memory session is cleared even if removing the saved copy fails.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if storage cannot be written.
    pub async fn end(&self) -> Result<(), StorageError> {
        self.current.write().await.take();
        self.storage.remove_item(keys::CURRENT_USER)
    }

    /// The backing storage.
    #[must_use]
    pub fn storage(&self) -> &Arc<dyn LocalStorage> {
        &self.storage
    }
}
