//! Account commands.
//!
//! # Usage
//!
//! ```bash
//! prisona login -e farmer@example.com -p secret -r farmer
//! prisona register -e meera@example.com -n "Meera Joshi" -r shop_owner --shop-name "Meera Mart" -p secret
//! prisona whoami
//! prisona logout
//! ```

use clap::Args;
use secrecy::SecretString;

use prisona_core::{Email, Role};
use prisona_storefront::AppState;
use prisona_storefront::models::{CurrentUser, NewUser, RoleProfile};
use prisona_storefront::services::auth::{AuthError, Registration};

/// Fields of the registration form.
#[derive(Debug, Args)]
pub struct RegisterForm {
    /// Account email address
    #[arg(short, long)]
    pub email: String,

    /// Display name
    #[arg(short, long)]
    pub name: String,

    /// Role to register as
    #[arg(short, long)]
    pub role: Role,

    /// Password (required, not checked)
    #[arg(short, long)]
    pub password: String,

    /// Contact number
    #[arg(long)]
    pub phone: Option<String>,

    /// Shop name (shop owners)
    #[arg(long)]
    pub shop_name: Option<String>,

    /// Farm location (farmers)
    #[arg(long)]
    pub farm_location: Option<String>,
}

impl RegisterForm {
    /// Build the registration for the selected role.
    ///
    /// Attributes belonging to other roles are ignored.
    fn into_new_user(self) -> Result<NewUser, AuthError> {
        let email = Email::parse(&self.email)?;
        let name = self.name;
        let new_user = match self.role {
            Role::Customer => NewUser::customer(name, email),
            Role::ShopOwner => {
                NewUser::shop_owner(name, email, self.shop_name.unwrap_or_default())
            }
            Role::Farmer => NewUser::farmer(name, email, self.farm_location.unwrap_or_default()),
            Role::DeliveryAgent => NewUser::delivery_agent(name, email),
            Role::DeliveryAdmin => NewUser::delivery_admin(name, email),
            Role::Admin => NewUser::admin(name, email),
        };
        Ok(new_user.with_phone(self.phone.unwrap_or_default()))
    }
}

/// Sign in and report where the user lands.
#[allow(clippy::print_stdout)]
pub async fn login(
    state: &AppState,
    email: &str,
    password: String,
    role: Role,
) -> Result<(), AuthError> {
    let password = SecretString::from(password);
    let sign_in = state.auth().login(email, &password, role).await?;

    println!("Welcome back, {}!", sign_in.user.name);
    println!("Redirecting to {}", sign_in.redirect);
    Ok(())
}

/// Register a new account.
#[allow(clippy::print_stdout)]
pub async fn register(state: &AppState, form: RegisterForm) -> Result<(), AuthError> {
    let password = SecretString::from(form.password.clone());
    let new_user = form.into_new_user()?;
    let registration = state.auth().register(new_user, &password).await?;

    match &registration {
        Registration::SignedIn(user) => {
            println!("Account created. Signed in as {}.", user.name);
        }
        Registration::PendingApproval(user) => {
            println!(
                "Account created for {}. Your {} account is pending approval.",
                user.name(),
                user.role().label()
            );
        }
    }
    println!("Redirecting to {}", registration.redirect());
    Ok(())
}

/// Sign out.
#[allow(clippy::print_stdout)]
pub async fn logout(state: &AppState) -> Result<(), AuthError> {
    state.auth().logout().await?;
    println!("Signed out.");
    Ok(())
}

/// Print the signed-in user.
#[allow(clippy::print_stdout)]
pub async fn whoami(state: &AppState) {
    match state.auth().current_user().await {
        Some(user) => println!("{}", describe(&user)),
        None => println!("Not signed in."),
    }
}

fn describe(user: &CurrentUser) -> String {
    let detail = match &user.profile {
        RoleProfile::ShopOwner { shop_name } => format!(" at {shop_name}"),
        RoleProfile::Farmer { farm_location } => format!(" from {farm_location}"),
        RoleProfile::DeliveryAgent { is_available } => {
            if *is_available {
                " (available)".to_string()
            } else {
                " (unavailable)".to_string()
            }
        }
        RoleProfile::Customer | RoleProfile::DeliveryAdmin | RoleProfile::Admin => String::new(),
    };
    format!(
        "{} <{}>, {}{} [id {}]",
        user.name,
        user.email,
        user.role().label(),
        detail,
        user.id
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(role: Role) -> RegisterForm {
        RegisterForm {
            email: "new@example.com".to_string(),
            name: "New User".to_string(),
            role,
            password: "pw".to_string(),
            phone: Some("  ".to_string()),
            shop_name: Some("Corner Shop".to_string()),
            farm_location: None,
        }
    }

    #[test]
    fn test_form_builds_role_profile() {
        let shop_owner = form(Role::ShopOwner).into_new_user().unwrap();
        assert_eq!(
            shop_owner.profile,
            RoleProfile::ShopOwner {
                shop_name: "Corner Shop".to_string()
            }
        );
        assert_eq!(shop_owner.phone, None);

        let customer = form(Role::Customer).into_new_user().unwrap();
        assert_eq!(customer.profile, RoleProfile::Customer);
    }

    #[test]
    fn test_farmer_without_location_is_incomplete() {
        let farmer = form(Role::Farmer).into_new_user().unwrap();
        assert_eq!(farmer.missing_field(), Some("farm_location"));
    }

    #[test]
    fn test_form_rejects_bad_email() {
        let mut bad = form(Role::Customer);
        bad.email = "not-an-email".to_string();
        assert!(matches!(
            bad.into_new_user(),
            Err(AuthError::InvalidEmail(_))
        ));
    }
}
