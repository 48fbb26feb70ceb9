//! Authentication service.
//!
//! Sign-in is a directory lookup on email and role; the password is required
//! on the form but never compared against anything. Every call that would hit
//! a backend waits for the configured simulated latency first.

mod error;

pub use error::AuthError;

use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use prisona_core::{Email, Role};

use crate::db::{RepositoryError, UserDirectory};
use crate::models::session::CurrentUser;
use crate::models::user::{NewUser, User};
use crate::routes::{self, PENDING_APPROVAL_PATH};
use crate::services::session::SessionStore;

/// Result of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignIn {
    /// The identity now held by the session.
    pub user: CurrentUser,
    /// Where the client should navigate next.
    pub redirect: &'static str,
}

/// Result of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// A customer account, already signed in.
    SignedIn(CurrentUser),
    /// Any other role; the account exists but no session was started.
    PendingApproval(User),
}

impl Registration {
    /// Where the client should navigate next.
    #[must_use]
    pub fn redirect(&self) -> &'static str {
        match self {
            Self::SignedIn(user) => routes::dashboard_path(user.role()),
            Self::PendingApproval(_) => PENDING_APPROVAL_PATH,
        }
    }
}

/// Authentication service.
///
/// Handles login, registration and logout against an injected directory and
/// session store.
#[derive(Debug, Clone)]
pub struct AuthService {
    directory: Arc<UserDirectory>,
    session: Arc<SessionStore>,
    latency: Duration,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(
        directory: Arc<UserDirectory>,
        session: Arc<SessionStore>,
        latency: Duration,
    ) -> Self {
        Self {
            directory,
            session,
            latency,
        }
    }

    /// Sign in as the directory user with this email and role.
    ///
    /// The password must be non-empty but is otherwise accepted unchecked.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` if email or password is blank.
    /// Returns `AuthError::InvalidEmail` if the email is malformed.
    /// Returns `AuthError::InvalidCredentials` if no record matches both email
    /// and role; the session is left as it was.
    /// Returns `AuthError::Storage` if the session cannot be persisted.
    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
        role: Role,
    ) -> Result<SignIn, AuthError> {
        if email.trim().is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if password.expose_secret().is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        self.simulate_latency().await;

        let email = Email::parse(email)?;
        let Some(user) = self.directory.get_by_email_and_role(&email, role).await else {
            tracing::warn!(%email, %role, "login rejected: no matching account");
            return Err(AuthError::InvalidCredentials);
        };

        let current = CurrentUser::from(&user);
        self.session.begin(current.clone()).await?;

        tracing::info!(user_id = %user.id(), %email, %role, "user logged in");

        Ok(SignIn {
            user: current,
            redirect: routes::dashboard_path(role),
        })
    }

    /// Register a new account.
    ///
    /// Customers are signed in immediately. Other roles are stored unapproved
    /// and the session is not touched.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` if a required field or the password
    /// is blank; nothing is mutated in that case.
    /// Returns `AuthError::UserAlreadyExists` if the email is already in the
    /// directory; the directory is unchanged.
    /// Returns `AuthError::Storage` if a customer session cannot be persisted.
    pub async fn register(
        &self,
        new_user: NewUser,
        password: &SecretString,
    ) -> Result<Registration, AuthError> {
        if let Some(field) = new_user.missing_field() {
            return Err(AuthError::MissingField(field));
        }
        if password.expose_secret().is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        self.simulate_latency().await;

        let email = new_user.email.clone();
        let user = self.directory.create(new_user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => {
                tracing::warn!(%email, "registration rejected: email already registered");
                AuthError::UserAlreadyExists
            }
            other => AuthError::Repository(other),
        })?;

        tracing::info!(
            user_id = %user.id(),
            %email,
            role = %user.role(),
            approved = user.is_approved(),
            "user registered"
        );

        if user.role().is_self_service() {
            let current = CurrentUser::from(&user);
            self.session.begin(current.clone()).await?;
            Ok(Registration::SignedIn(current))
        } else {
            Ok(Registration::PendingApproval(user))
        }
    }

    /// Sign out. Always clears the session, signed in or not.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the saved session cannot be removed;
    /// the in-memory session is cleared regardless.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let previous = self.session.current().await;
        self.session.end().await?;

        match previous {
            Some(user) => tracing::info!(user_id = %user.id, role = %user.role(), "user logged out"),
            None => tracing::debug!("logout without an active session"),
        }
        Ok(())
    }

    /// The signed-in user, if any.
    pub async fn current_user(&self) -> Option<CurrentUser> {
        self.session.current().await
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(
            Arc::new(UserDirectory::seeded()),
            Arc::new(SessionStore::in_memory()),
            Duration::ZERO,
        )
    }

    fn password(s: &str) -> SecretString {
        SecretString::from(s.to_owned())
    }

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_login_success_redirects_to_dashboard() {
        let auth = service();
        let sign_in = auth
            .login("customer@example.com", &password("anything"), Role::Customer)
            .await
            .unwrap();

        assert_eq!(sign_in.user.role(), Role::Customer);
        assert_eq!(sign_in.redirect, "/customer/dashboard");
        assert_eq!(auth.current_user().await, Some(sign_in.user));
    }

    #[tokio::test]
    async fn test_login_unknown_email_fails() {
        let auth = service();
        let err = auth
            .login("nope@example.com", &password("x"), Role::Customer)
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(auth.current_user().await, None);
    }

    #[tokio::test]
    async fn test_login_wrong_role_fails() {
        let auth = service();
        let err = auth
            .login("farmer@example.com", &password("x"), Role::ShopOwner)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_requires_password() {
        let auth = service();
        let err = auth
            .login("customer@example.com", &password(""), Role::Customer)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingField("password")));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_session() {
        let auth = service();
        auth.login("admin@example.com", &password("x"), Role::Admin)
            .await
            .unwrap();

        auth.login("admin@example.com", &password("x"), Role::Farmer)
            .await
            .unwrap_err();

        assert_eq!(
            auth.current_user().await.map(|u| u.role()),
            Some(Role::Admin)
        );
    }

    #[tokio::test]
    async fn test_register_customer_signs_in() {
        let auth = service();
        let registration = auth
            .register(
                NewUser::customer("Asha", email("asha@example.com")),
                &password("pw"),
            )
            .await
            .unwrap();

        assert!(matches!(registration, Registration::SignedIn(_)));
        assert_eq!(registration.redirect(), "/customer/dashboard");
        assert!(auth.current_user().await.is_some());
    }

    #[tokio::test]
    async fn test_register_vendor_is_pending() {
        let auth = service();
        let registration = auth
            .register(
                NewUser::shop_owner("Meera", email("meera@example.com"), "Meera Mart"),
                &password("pw"),
            )
            .await
            .unwrap();

        let Registration::PendingApproval(user) = &registration else {
            panic!("expected pending approval, got {registration:?}");
        };
        assert!(!user.is_approved());
        assert_eq!(registration.redirect(), PENDING_APPROVAL_PATH);
        assert_eq!(auth.current_user().await, None);
    }

    #[tokio::test]
    async fn test_register_missing_field_mutates_nothing() {
        let directory = Arc::new(UserDirectory::seeded());
        let auth = AuthService::new(
            Arc::clone(&directory),
            Arc::new(SessionStore::in_memory()),
            Duration::ZERO,
        );
        let before = directory.len().await;

        let err = auth
            .register(
                NewUser::farmer("Ravi", email("ravi2@example.com"), ""),
                &password("pw"),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::MissingField("farm_location")));
        assert_eq!(directory.len().await, before);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let auth = service();
        auth.login("delivery@example.com", &password("x"), Role::DeliveryAgent)
            .await
            .unwrap();

        auth.logout().await.unwrap();
        assert_eq!(auth.current_user().await, None);

        auth.logout().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_latency() {
        let auth = AuthService::new(
            Arc::new(UserDirectory::seeded()),
            Arc::new(SessionStore::in_memory()),
            Duration::from_millis(800),
        );
        let started = tokio::time::Instant::now();

        auth.login("admin@example.com", &password("x"), Role::Admin)
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(800));
    }
}
