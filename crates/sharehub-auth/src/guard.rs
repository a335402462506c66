//! Route definitions and the navigation guard.
//!
//! The guard is a pure function of the requested path and the current
//! session. It never blocks and never touches storage.

use std::fmt;

use tracing::debug;

use crate::session::Session;

/// Paths reachable without being logged in.
pub const PUBLIC_PATHS: [&str; 3] = ["/", "/login", "/register"];

/// A view of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing page.
    Home,
    /// Login form.
    Login,
    /// Registration form.
    Register,
    /// Resource feed with search and category tabs.
    Explore,
    /// Upload form.
    Upload,
    /// Any path the router does not know.
    Other(String),
}

impl Route {
    /// Parse a navigation path. Matching is exact: `/login/` is not `/login`.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/explore" => Self::Explore,
            "/upload" => Self::Upload,
            _ => Self::Other(path.to_string()),
        }
    }

    /// The canonical path of this route.
    pub fn path(&self) -> &str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Explore => "/explore",
            Self::Upload => "/upload",
            Self::Other(path) => path,
        }
    }

    /// Whether the route is in the public allow-list.
    pub fn is_public(&self) -> bool {
        PUBLIC_PATHS.iter().any(|p| *p == self.path())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Render the requested view.
    Render(Route),
    /// Go to another view instead.
    Redirect(Route),
}

impl Navigation {
    /// The route that ends up on screen.
    pub fn target(&self) -> &Route {
        match self {
            Self::Render(route) | Self::Redirect(route) => route,
        }
    }

    /// Whether the requested view was replaced.
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}

/// Login redirect predicate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    /// Decide what to show for `path` given `session`.
    ///
    /// Logged-out users asking for a non-public path go to `/login`.
    /// Logged-in users asking for an unknown path go to `/explore`.
    pub fn check(path: &str, session: &Session) -> Navigation {
        let route = Route::from_path(path);

        let navigation = if !session.is_logged_in && !route.is_public() {
            Navigation::Redirect(Route::Login)
        } else if matches!(route, Route::Other(_)) {
            Navigation::Redirect(Route::Explore)
        } else {
            Navigation::Render(route)
        };

        debug!(path, logged_in = session.is_logged_in, ?navigation, "Route checked");
        navigation
    }
}
