//! Prisona Store library.
//!
//! Session, mock directory, role navigation and catalog logic behind the
//! `prisona` command-line front end. Everything is in memory except the
//! saved session.
//!
//! Entry point is [`state::AppState`], which wires the repositories in
//! [`db`] to the services in [`services`]. Navigation decisions live in
//! [`routes`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use error::{AppError, Result};
pub use state::AppState;
