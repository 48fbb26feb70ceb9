//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::session::StorageError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] prisona_core::EmailError),

    /// No directory record matches the email and role.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration with an email that is already in the directory.
    #[error("user already exists")]
    UserAlreadyExists,

    /// A required form field was left blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The session could not be saved or removed.
    #[error("session storage error: {0}")]
    Storage(#[from] StorageError),

    /// Repository error other than a uniqueness conflict.
    #[error("directory error: {0}")]
    Repository(#[from] RepositoryError),
}
