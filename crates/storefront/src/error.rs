//! Unified error handling.
//!
//! Provides a unified `AppError` type for front ends. Every failure maps to a
//! short toast message via [`AppError::toast`]; internal details stay in the
//! logs.

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::catalog::CatalogError;
use crate::services::session::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Session storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Coupon or order operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether this is a fault on our side rather than the user's.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Repository(_)
                | Self::Storage(_)
                | Self::Config(_)
                | Self::Auth(AuthError::Storage(_) | AuthError::Repository(_))
        )
    }

    /// Message safe to show the user.
    #[must_use]
    pub fn toast(&self) -> String {
        match self {
            Self::Repository(_) | Self::Storage(_) | Self::Config(_) => {
                "Something went wrong. Please try again.".to_string()
            }
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Invalid credentials".to_string(),
                AuthError::InvalidEmail(_) => "Please enter a valid email address".to_string(),
                AuthError::UserAlreadyExists => {
                    "An account with this email already exists".to_string()
                }
                AuthError::MissingField(field) => {
                    format!("Please fill in {}", field.replace('_', " "))
                }
                AuthError::Storage(_) | AuthError::Repository(_) => {
                    "Something went wrong. Please try again.".to_string()
                }
            },
            Self::Catalog(err) => match err {
                CatalogError::CouponNotFound(_) | CatalogError::CouponNotRedeemable(_) => {
                    "Invalid or expired coupon".to_string()
                }
                CatalogError::MinimumNotMet { minimum } => {
                    format!("Minimum order amount is {minimum}")
                }
                CatalogError::NotACustomer => "Only customers can place orders".to_string(),
                CatalogError::EmptyOrder => "Your cart is empty".to_string(),
                CatalogError::InvalidQuantity(_) => "Please enter a valid quantity".to_string(),
                CatalogError::AmountOutOfRange => "That amount is too large".to_string(),
                CatalogError::UnknownProduct(_) | CatalogError::Unavailable(_) => {
                    "Some items are no longer available".to_string()
                }
            },
            Self::NotFound(message) | Self::Unauthorized(message) | Self::BadRequest(message) => {
                message.clone()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
