//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Login, registration and logout against the mock directory
//! - `session` - The single signed-in identity and its local-storage copy
//! - `catalog` - Listings, coupons and order placement

pub mod auth;
pub mod catalog;
pub mod session;
