//! Command implementations.
//!
//! - `account` - Login, registration, logout and `whoami`
//! - `nav` - Sidebar and navigation guard
//! - `catalog` - Listings, coupons and checkout

pub mod account;
pub mod catalog;
pub mod nav;
