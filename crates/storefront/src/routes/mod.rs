//! In-app navigation.
//!
//! There is no HTTP surface. Routes are plain paths; [`table`] maps each role
//! to its area and sidebar, and [`guard`] decides what a given path does for
//! the current session.
//!
//! # Route Structure
//!
//! ```text
//! /                       - Home
//! /login                  - Login (redirects when signed in)
//! /register               - Register (redirects when signed in)
//! /pending-approval       - Shown after a vendor registration
//! /products, /products/*  - Public catalog
//! /cart                   - Cart
//!
//! /customer/*             - Customer area
//! /shop-owner/*           - Shop owner area
//! /farmer/*               - Farmer area
//! /delivery-agent/*       - Delivery agent area
//! /delivery-admin/*       - Delivery admin area
//! /admin/*                - Admin area
//! ```

pub mod guard;
pub mod table;

pub use guard::{Navigation, resolve};
pub use table::{NavItem, RoleRoutes, area_of, dashboard_for, dashboard_path, for_role};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const PENDING_APPROVAL_PATH: &str = "/pending-approval";
pub const PRODUCTS_PATH: &str = "/products";
pub const CART_PATH: &str = "/cart";
