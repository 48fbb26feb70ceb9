//! Navigation guard.
//!
//! Decides whether a path renders, redirects or does not exist for the
//! current session.

use super::table::{area_of, dashboard_path, is_within};
use super::{
    CART_PATH, HOME_PATH, LOGIN_PATH, PENDING_APPROVAL_PATH, PRODUCTS_PATH, REGISTER_PATH,
};
use crate::models::session::CurrentUser;

/// Outcome of navigating to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Show the page.
    Render,
    /// Go somewhere else instead.
    Redirect(&'static str),
    /// No such page.
    NotFound,
}

/// Resolve `path` against the signed-in user, if any.
///
/// Query strings, fragments and trailing slashes are ignored.
#[must_use]
pub fn resolve(path: &str, session: Option<&CurrentUser>) -> Navigation {
    let path = normalize(path);

    if path == LOGIN_PATH || path == REGISTER_PATH {
        return session.map_or(Navigation::Render, |user| {
            Navigation::Redirect(dashboard_path(user.role()))
        });
    }
    if is_public(path) {
        return Navigation::Render;
    }

    let Some(area) = area_of(path) else {
        return Navigation::NotFound;
    };
    let Some(user) = session else {
        tracing::debug!(path, "protected path without session");
        return Navigation::Redirect(LOGIN_PATH);
    };
    if user.role() != area.role {
        tracing::debug!(path, role = %user.role(), "path belongs to another role");
        return Navigation::Redirect(dashboard_path(user.role()));
    }

    if path == area.area {
        Navigation::Redirect(area.dashboard)
    } else if area.permits(path) {
        Navigation::Render
    } else {
        Navigation::NotFound
    }
}

fn is_public(path: &str) -> bool {
    [HOME_PATH, PENDING_APPROVAL_PATH, CART_PATH].contains(&path)
        || is_within(path, PRODUCTS_PATH)
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        HOME_PATH
    } else {
        trimmed
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use prisona_core::{Email, Role, UserId};

    use super::*;
    use crate::models::user::{NewUser, User};

    fn signed_in(new_user: NewUser) -> CurrentUser {
        CurrentUser::from(&User::seeded(UserId::new(1), new_user, Utc::now()))
    }

    fn customer() -> CurrentUser {
        signed_in(NewUser::customer(
            "Priya",
            Email::parse("customer@example.com").unwrap(),
        ))
    }

    fn farmer() -> CurrentUser {
        signed_in(NewUser::farmer(
            "Ravi",
            Email::parse("farmer@example.com").unwrap(),
            "Nashik",
        ))
    }

    #[test]
    fn test_public_paths_render_for_everyone() {
        for path in ["/", "/products", "/products/3", "/cart", "/pending-approval"] {
            assert_eq!(resolve(path, None), Navigation::Render, "{path}");
            assert_eq!(resolve(path, Some(&farmer())), Navigation::Render, "{path}");
        }
    }

    #[test]
    fn test_login_redirects_when_signed_in() {
        assert_eq!(resolve("/login", None), Navigation::Render);
        assert_eq!(
            resolve("/login", Some(&customer())),
            Navigation::Redirect("/customer/dashboard")
        );
        assert_eq!(
            resolve("/register/", Some(&farmer())),
            Navigation::Redirect("/farmer/dashboard")
        );
    }

    #[test]
    fn test_protected_path_without_session_goes_to_login() {
        assert_eq!(
            resolve("/admin/users", None),
            Navigation::Redirect(LOGIN_PATH)
        );
        assert_eq!(
            resolve("/customer/orders?page=2", None),
            Navigation::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn test_wrong_role_goes_to_own_dashboard() {
        assert_eq!(
            resolve("/shop-owner/products", Some(&farmer())),
            Navigation::Redirect("/farmer/dashboard")
        );
        assert_eq!(
            resolve("/admin", Some(&customer())),
            Navigation::Redirect(dashboard_path(Role::Customer))
        );
    }

    #[test]
    fn test_own_area() {
        let user = farmer();
        assert_eq!(resolve("/farmer/earnings", Some(&user)), Navigation::Render);
        assert_eq!(resolve("/farmer/orders/12#top", Some(&user)), Navigation::Render);
        assert_eq!(
            resolve("/farmer", Some(&user)),
            Navigation::Redirect("/farmer/dashboard")
        );
        assert_eq!(resolve("/farmer/coupons", Some(&user)), Navigation::NotFound);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(resolve("/nowhere", None), Navigation::NotFound);
        assert_eq!(resolve("/administrator", Some(&customer())), Navigation::NotFound);
    }
}
