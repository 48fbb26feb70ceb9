//! Application state shared across front ends.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::db::{CatalogRepository, UserDirectory};
use crate::services::auth::AuthService;
use crate::services::catalog::CatalogService;
use crate::services::session::{FileStorage, LocalStorage, MemoryStorage, SessionStore};

/// Application state.
///
/// This struct is cheaply cloneable via `Arc` and owns the directory, the
/// catalog and the session, plus the services wired over them.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: StorefrontConfig,
    directory: Arc<UserDirectory>,
    catalog: Arc<CatalogRepository>,
    session: Arc<SessionStore>,
    auth: AuthService,
    catalog_service: CatalogService,
}

impl AppState {
    /// Create a new application state over seeded fixtures.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `storage` - Backend for the saved session
    #[must_use]
    pub fn new(config: StorefrontConfig, storage: Arc<dyn LocalStorage>) -> Self {
        let directory = Arc::new(UserDirectory::seeded());
        let catalog = Arc::new(CatalogRepository::seeded(config.currency));
        let session = Arc::new(SessionStore::restore(storage));

        let auth = AuthService::new(Arc::clone(&directory), Arc::clone(&session), config.latency);
        let catalog_service = CatalogService::new(Arc::clone(&catalog), config.latency);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                directory,
                catalog,
                session,
                auth,
                catalog_service,
            }),
        }
    }

    /// State whose session is saved to `config.session_file`.
    #[must_use]
    pub fn with_file_session(config: StorefrontConfig) -> Self {
        let storage = Arc::new(FileStorage::new(config.session_file.clone()));
        Self::new(config, storage)
    }

    /// State whose session lives only in memory.
    #[must_use]
    pub fn in_memory(config: StorefrontConfig) -> Self {
        Self::new(config, Arc::new(MemoryStorage::new()))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the user directory.
    #[must_use]
    pub fn directory(&self) -> &Arc<UserDirectory> {
        &self.inner.directory
    }

    /// Get a reference to the catalog repository.
    #[must_use]
    pub fn catalog_repository(&self) -> &Arc<CatalogRepository> {
        &self.inner.catalog
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.inner.session
    }

    /// Get a reference to the authentication service.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// Get a reference to the catalog service.
    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog_service
    }
}
