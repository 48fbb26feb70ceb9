//! Route table and guard driven by a real session.

#![allow(clippy::unwrap_used)]

use prisona_core::Role;
use prisona_integration_tests::TestContext;
use prisona_storefront::routes::{self, LOGIN_PATH, Navigation};

#[tokio::test]
async fn test_signed_in_user_reaches_every_sidebar_page() {
    for role in Role::ALL {
        let ctx = TestContext::new();
        let user = ctx.sign_in_as(role).await;

        for item in routes::for_role(role).sidebar {
            assert_eq!(
                routes::resolve(item.path, Some(&user)),
                Navigation::Render,
                "{role} {}",
                item.path
            );
        }
    }
}

#[tokio::test]
async fn test_other_areas_redirect_home() {
    let ctx = TestContext::new();
    let user = ctx.sign_in_as(Role::DeliveryAgent).await;

    for other in Role::ALL.into_iter().filter(|r| *r != Role::DeliveryAgent) {
        let dashboard = routes::dashboard_path(other);
        assert_eq!(
            routes::resolve(dashboard, Some(&user)),
            Navigation::Redirect("/delivery-agent/dashboard"),
            "{dashboard}"
        );
    }
}

#[tokio::test]
async fn test_logout_locks_the_dashboard_again() {
    let ctx = TestContext::new();
    ctx.sign_in_as(Role::ShopOwner).await;
    let current = ctx.state.session().current().await;
    assert_eq!(
        routes::resolve("/shop-owner/coupons", current.as_ref()),
        Navigation::Render
    );

    ctx.state.auth().logout().await.unwrap();
    let current = ctx.state.session().current().await;
    assert_eq!(
        routes::resolve("/shop-owner/coupons", current.as_ref()),
        Navigation::Redirect(LOGIN_PATH)
    );
    assert_eq!(routes::resolve("/login", current.as_ref()), Navigation::Render);
}

#[test]
fn test_unknown_role_identifier_goes_to_login() {
    assert_eq!(routes::dashboard_for("super_admin"), LOGIN_PATH);
    assert_eq!(routes::dashboard_for("delivery-admin"), "/delivery-admin/dashboard");
}
