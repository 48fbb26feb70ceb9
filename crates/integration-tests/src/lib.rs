//! Integration tests for Prisona Store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p prisona-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_flows` - Login, registration and logout across every role
//! - `navigation` - Route table and guard driven by a real session
//! - `catalog_flows` - Coupons, checkout and order visibility
//! - `session_persistence` - Saved sessions across restarts

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;

use prisona_core::Role;
use prisona_storefront::AppState;
use prisona_storefront::config::StorefrontConfig;
use prisona_storefront::models::CurrentUser;
use prisona_storefront::services::session::{LocalStorage, MemoryStorage};

/// A seeded application with zero latency and inspectable storage.
pub struct TestContext {
    pub state: AppState,
    pub storage: Arc<dyn LocalStorage>,
}

impl TestContext {
    /// Fresh state backed by in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()))
    }

    /// Fresh state over existing storage, as after a restart.
    #[must_use]
    pub fn with_storage(storage: Arc<dyn LocalStorage>) -> Self {
        let state = AppState::new(config(), Arc::clone(&storage));
        Self { state, storage }
    }

    /// Sign in as the seeded account for `role`.
    ///
    /// # Panics
    ///
    /// Panics if the seeded account is missing.
    #[allow(clippy::expect_used)]
    pub async fn sign_in_as(&self, role: Role) -> CurrentUser {
        self.state
            .auth()
            .login(seeded_email(role), &password(), role)
            .await
            .expect("seeded account should sign in")
            .user
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration with no simulated latency.
#[must_use]
pub fn config() -> StorefrontConfig {
    StorefrontConfig::default().without_latency()
}

/// Any non-empty password; it is never checked.
#[must_use]
pub fn password() -> SecretString {
    SecretString::from("anything")
}

/// Seeded email for each role.
#[must_use]
pub const fn seeded_email(role: Role) -> &'static str {
    match role {
        Role::Customer => "customer@example.com",
        Role::ShopOwner => "shopowner@example.com",
        Role::Farmer => "farmer@example.com",
        Role::DeliveryAgent => "delivery@example.com",
        Role::DeliveryAdmin => "deliveryadmin@example.com",
        Role::Admin => "admin@example.com",
    }
}

/// A session file path unique to this process and `name`.
#[must_use]
pub fn temp_session_file(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("prisona-it-{}-{name}", std::process::id()))
        .join("session.json")
}
