//! Hash-based routing.
//!
//! URL format: `#/dashboard/new-transfer`. Routing by hash keeps the app
//! deployable as static files with no server-side rewrites.

use super::AuthState;

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Landing page: `#/` or empty hash
    Home,
    /// Metrics dashboard: `#/dashboard`
    Dashboard,
    /// Transfer setup screen: `#/dashboard/new-transfer`
    NewTransfer,
    /// Anything else, with the unmatched path
    NotFound(String),
}

/// Sidebar navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

/// Dashboard sidebar navigation, in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        id: "dashboard",
        label: "Dashboard",
        path: "/dashboard",
    },
    NavItem {
        id: "new-transfer",
        label: "New Transfer",
        path: "/dashboard/new-transfer",
    },
    NavItem {
        id: "sessions",
        label: "Sessions",
        path: "/dashboard/sessions",
    },
    NavItem {
        id: "analytics",
        label: "Analytics",
        path: "/dashboard/analytics",
    },
];

impl AppRoute {
    /// Parse a path (`/dashboard`) or hash (`#/dashboard`).
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "" => Self::Home,
            "dashboard" => Self::Dashboard,
            "dashboard/new-transfer" => Self::NewTransfer,
            other => Self::NotFound(format!("/{}", other)),
        }
    }

    /// Path without the hash prefix.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::NewTransfer => "/dashboard/new-transfer".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }

    pub fn to_hash(&self) -> String {
        format!("#{}", self.path())
    }

    /// Routes under `/dashboard` need a signed-in user.
    pub fn requires_auth(&self) -> bool {
        match self {
            Self::Dashboard | Self::NewTransfer => true,
            Self::NotFound(path) => path.starts_with("/dashboard"),
            Self::Home => false,
        }
    }

    /// Sidebar item id highlighted for this route.
    pub fn nav_id(&self) -> Option<&'static str> {
        match self {
            Self::Dashboard => Some("dashboard"),
            Self::NewTransfer => Some("new-transfer"),
            _ => None,
        }
    }
}

/// Where to send the user instead of `route`, if anywhere.
///
/// - While the session is still loading, stay put.
/// - Protected routes without a user go to the landing page.
/// - The landing page with a user goes to the dashboard.
pub fn redirect_for(route: &AppRoute, auth: &AuthState) -> Option<AppRoute> {
    match auth {
        AuthState::Loading => None,
        AuthState::SignedOut if route.requires_auth() => Some(AppRoute::Home),
        AuthState::SignedIn(_) if *route == AppRoute::Home => Some(AppRoute::Dashboard),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn signed_in() -> AuthState {
        AuthState::SignedIn(User {
            uid: "u".to_string(),
            email: "u@example.com".to_string(),
            display_name: None,
            id_token: String::new(),
            refresh_token: String::new(),
        })
    }

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/dashboard"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_hash("#/dashboard/"), AppRoute::Dashboard);
        assert_eq!(
            AppRoute::from_hash("/dashboard/new-transfer"),
            AppRoute::NewTransfer
        );
        assert_eq!(
            AppRoute::from_hash("#/dashboard/sessions"),
            AppRoute::NotFound("/dashboard/sessions".to_string())
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Home.to_hash(), "#/");
        assert_eq!(AppRoute::Dashboard.to_hash(), "#/dashboard");
        assert_eq!(AppRoute::NewTransfer.to_hash(), "#/dashboard/new-transfer");
    }

    #[test]
    fn test_nav_items_parse() {
        assert_eq!(AppRoute::from_hash(NAV_ITEMS[0].path), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_hash(NAV_ITEMS[1].path), AppRoute::NewTransfer);
        assert!(AppRoute::from_hash(NAV_ITEMS[2].path).requires_auth());
    }

    #[test]
    fn test_redirects() {
        let out = AuthState::SignedOut;
        assert_eq!(redirect_for(&AppRoute::Dashboard, &out), Some(AppRoute::Home));
        assert_eq!(redirect_for(&AppRoute::NewTransfer, &out), Some(AppRoute::Home));
        assert_eq!(redirect_for(&AppRoute::Home, &out), None);

        let user = signed_in();
        assert_eq!(redirect_for(&AppRoute::Home, &user), Some(AppRoute::Dashboard));
        assert_eq!(redirect_for(&AppRoute::NewTransfer, &user), None);
    }

    #[test]
    fn test_no_redirect_while_loading() {
        let loading = AuthState::Loading;
        assert_eq!(redirect_for(&AppRoute::Dashboard, &loading), None);
        assert_eq!(redirect_for(&AppRoute::Home, &loading), None);
    }
}
