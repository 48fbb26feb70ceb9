//! In-memory repositories standing in for a user database and catalog API.
//!
//! Nothing here is durable: every [`UserDirectory`] and [`CatalogRepository`]
//! lives as long as the application state that owns it and starts from the
//! fixtures in [`fixtures`].
//!
//! - [`users`] - The mock directory used for login and registration
//! - [`catalog`] - Products, orders and coupons
//! - [`fixtures`] - Seed data

pub mod catalog;
pub mod fixtures;
pub mod users;

pub use catalog::CatalogRepository;
pub use users::UserDirectory;

use thiserror::Error;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}
