//! Role→route table.
//!
//! One static entry per role: the area prefix, the dashboard, the ordered
//! sidebar and any extra pages reachable without a sidebar link.

use prisona_core::Role;

use super::LOGIN_PATH;

/// A sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const fn item(label: &'static str, path: &'static str) -> NavItem {
    NavItem { label, path }
}

/// Navigation for one role.
#[derive(Debug, PartialEq, Eq)]
pub struct RoleRoutes {
    pub role: Role,
    /// Path prefix owning every page of this role.
    pub area: &'static str,
    /// Landing page after sign-in.
    pub dashboard: &'static str,
    /// Sidebar links in display order; the first is the dashboard.
    pub sidebar: &'static [NavItem],
    /// Pages reachable from within the area but not linked in the sidebar.
    pub extra: &'static [&'static str],
}

impl RoleRoutes {
    /// Whether `path` is the dashboard, a sidebar or extra page, or below one.
    #[must_use]
    pub fn permits(&self, path: &str) -> bool {
        self.sidebar
            .iter()
            .map(|item| item.path)
            .chain(self.extra.iter().copied())
            .any(|allowed| is_within(path, allowed))
    }

    /// Whether `path` lies inside this role's area.
    #[must_use]
    pub fn owns(&self, path: &str) -> bool {
        is_within(path, self.area)
    }
}

static CUSTOMER: RoleRoutes = RoleRoutes {
    role: Role::Customer,
    area: "/customer",
    dashboard: "/customer/dashboard",
    sidebar: &[
        item("Dashboard", "/customer/dashboard"),
        item("My Orders", "/customer/orders"),
        item("Wishlist", "/customer/wishlist"),
        item("Addresses", "/customer/addresses"),
        item("Profile", "/customer/profile"),
    ],
    extra: &["/customer/checkout", "/customer/order-success"],
};

static SHOP_OWNER: RoleRoutes = RoleRoutes {
    role: Role::ShopOwner,
    area: "/shop-owner",
    dashboard: "/shop-owner/dashboard",
    sidebar: &[
        item("Dashboard", "/shop-owner/dashboard"),
        item("Products", "/shop-owner/products"),
        item("Orders", "/shop-owner/orders"),
        item("Coupons", "/shop-owner/coupons"),
        item("Analytics", "/shop-owner/analytics"),
        item("Profile", "/shop-owner/profile"),
    ],
    extra: &[],
};

static FARMER: RoleRoutes = RoleRoutes {
    role: Role::Farmer,
    area: "/farmer",
    dashboard: "/farmer/dashboard",
    sidebar: &[
        item("Dashboard", "/farmer/dashboard"),
        item("My Produce", "/farmer/products"),
        item("Orders", "/farmer/orders"),
        item("Earnings", "/farmer/earnings"),
        item("Profile", "/farmer/profile"),
    ],
    extra: &[],
};

static DELIVERY_AGENT: RoleRoutes = RoleRoutes {
    role: Role::DeliveryAgent,
    area: "/delivery-agent",
    dashboard: "/delivery-agent/dashboard",
    sidebar: &[
        item("Dashboard", "/delivery-agent/dashboard"),
        item("Assigned Deliveries", "/delivery-agent/deliveries"),
        item("History", "/delivery-agent/history"),
        item("Earnings", "/delivery-agent/earnings"),
        item("Profile", "/delivery-agent/profile"),
    ],
    extra: &[],
};

static DELIVERY_ADMIN: RoleRoutes = RoleRoutes {
    role: Role::DeliveryAdmin,
    area: "/delivery-admin",
    dashboard: "/delivery-admin/dashboard",
    sidebar: &[
        item("Dashboard", "/delivery-admin/dashboard"),
        item("Agents", "/delivery-admin/agents"),
        item("Assignments", "/delivery-admin/assignments"),
        item("Zones", "/delivery-admin/zones"),
        item("Reports", "/delivery-admin/reports"),
    ],
    extra: &[],
};

static ADMIN: RoleRoutes = RoleRoutes {
    role: Role::Admin,
    area: "/admin",
    dashboard: "/admin/dashboard",
    sidebar: &[
        item("Dashboard", "/admin/dashboard"),
        item("Users", "/admin/users"),
        item("Vendors", "/admin/vendors"),
        item("Products", "/admin/products"),
        item("Orders", "/admin/orders"),
        item("Coupons", "/admin/coupons"),
        item("Settings", "/admin/settings"),
    ],
    extra: &[],
};

/// Table entry for `role`.
#[must_use]
pub fn for_role(role: Role) -> &'static RoleRoutes {
    match role {
        Role::Customer => &CUSTOMER,
        Role::ShopOwner => &SHOP_OWNER,
        Role::Farmer => &FARMER,
        Role::DeliveryAgent => &DELIVERY_AGENT,
        Role::DeliveryAdmin => &DELIVERY_ADMIN,
        Role::Admin => &ADMIN,
    }
}

/// Canonical dashboard for `role`.
#[must_use]
pub fn dashboard_path(role: Role) -> &'static str {
    for_role(role).dashboard
}

/// Dashboard for a role identifier; unknown identifiers go to login.
#[must_use]
pub fn dashboard_for(identifier: &str) -> &'static str {
    identifier
        .parse::<Role>()
        .map_or(LOGIN_PATH, dashboard_path)
}

/// The role area containing `path`, if any.
#[must_use]
pub fn area_of(path: &str) -> Option<&'static RoleRoutes> {
    Role::ALL
        .into_iter()
        .map(for_role)
        .find(|routes| routes.owns(path))
}

/// `path` equals `prefix` or continues it at a segment boundary.
pub(super) fn is_within(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
