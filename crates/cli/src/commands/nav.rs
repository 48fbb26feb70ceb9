//! Navigation commands.

use prisona_storefront::{AppError, AppState};
use prisona_storefront::routes::{self, Navigation};

/// Print the sidebar for the current session, or the guard decision for `path`.
///
/// # Errors
///
/// Returns `AppError::NotFound` if `path` is not a page.
#[allow(clippy::print_stdout)]
pub async fn show(state: &AppState, path: Option<&str>) -> Result<(), AppError> {
    let user = state.session().current().await;

    let Some(path) = path else {
        match &user {
            Some(user) => {
                let table = routes::for_role(user.role());
                println!("{} ({})", user.role().label(), table.area);
                for item in table.sidebar {
                    println!("  {:<22} {}", item.label, item.path);
                }
            }
            None => {
                println!("Not signed in. Public pages:");
                for path in [
                    routes::HOME_PATH,
                    routes::PRODUCTS_PATH,
                    routes::CART_PATH,
                    routes::LOGIN_PATH,
                    routes::REGISTER_PATH,
                ] {
                    println!("  {path}");
                }
            }
        }
        return Ok(());
    };

    match routes::resolve(path, user.as_ref()) {
        Navigation::Render => println!("{path}: render"),
        Navigation::Redirect(target) => println!("{path}: redirect to {target}"),
        Navigation::NotFound => return Err(AppError::NotFound(format!("No page at {path}"))),
    }
    Ok(())
}
