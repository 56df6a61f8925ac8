//! View routing: which screen to show for a session and a requested page.
//!
//! Routing is a pure function. Every screen is gated behind an active
//! session, and `home` is role-polymorphic: customers land on the store
//! explorer, store accounts on their dashboard. Unknown page keys fall back
//! to the role's `home` screen.

use market_catalog_core::{Role, UserProfile};

/// Page keys the router understands.
pub mod pages {
    pub const LOGIN: &str = "login";
    pub const HOME: &str = "home";
    pub const DASHBOARD: &str = "dashboard";
    pub const PROFILE: &str = "profile";
    pub const FAVORITES: &str = "favorites";
}

/// A screen the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    /// Store search and store detail for customers.
    CustomerExplorer,
    /// Product management for store accounts.
    OperatorDashboard,
    Profile,
    /// Followed stores; not implemented yet, shows a notice.
    FavoritesPlaceholder,
}

/// Resolve the screen for `page` given the current session.
#[must_use]
pub fn resolve(session: Option<&UserProfile>, page: &str) -> Screen {
    let Some(profile) = session else {
        return Screen::Login;
    };

    match page {
        pages::DASHBOARD => Screen::OperatorDashboard,
        pages::PROFILE => Screen::Profile,
        pages::FAVORITES => Screen::FavoritesPlaceholder,
        _ => home_screen(profile.role()),
    }
}

/// The screen `home` resolves to for `role`.
#[must_use]
pub const fn home_screen(role: Role) -> Screen {
    match role {
        Role::Customer => Screen::CustomerExplorer,
        Role::Supermarket => Screen::OperatorDashboard,
    }
}

/// Landing page selected at login.
#[must_use]
pub const fn landing_page(role: Role) -> &'static str {
    match role {
        Role::Customer => pages::HOME,
        Role::Supermarket => pages::DASHBOARD,
    }
}

/// A navigation bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: &'static str,
    pub label: &'static str,
}

/// Navigation entries shown to `role`, in display order.
#[must_use]
pub const fn nav_items(role: Role) -> &'static [NavItem] {
    const CUSTOMER: &[NavItem] = &[
        NavItem {
            page: pages::HOME,
            label: "Explorar",
        },
        NavItem {
            page: pages::FAVORITES,
            label: "Favoritos",
        },
        NavItem {
            page: pages::PROFILE,
            label: "Perfil",
        },
    ];
    const SUPERMARKET: &[NavItem] = &[
        NavItem {
            page: pages::HOME,
            label: "Painel",
        },
        NavItem {
            page: pages::PROFILE,
            label: "Perfil",
        },
    ];

    match role {
        Role::Customer => CUSTOMER,
        Role::Supermarket => SUPERMARKET,
    }
}
