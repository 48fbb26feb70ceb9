//! Domain models for the storefront.
//!
//! - [`user`] - Directory records and registration data
//! - [`session`] - The signed-in identity kept in local storage
//! - [`catalog`] - Products, orders and coupons shown on dashboards

pub mod catalog;
pub mod session;
pub mod user;

pub use catalog::{Coupon, Discount, Order, OrderLine, Product};
pub use session::{CurrentUser, keys};
pub use user::{NewUser, RoleProfile, User};
