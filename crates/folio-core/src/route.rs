//! Client-side routes.

use std::fmt;

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/projects`
    Projects,
    /// `/profile`
    Profile,
    /// `/resume`
    Resume,
    /// `/contact`
    Contact,
    /// Catch-all fallback.
    NotFound,
}

impl Route {
    /// Resolve a location path to a route.
    ///
    /// The query string, the fragment and a single trailing slash are
    /// ignored. Unknown paths resolve to [`Route::NotFound`].
    pub fn resolve(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        match path {
            "/" | "" => Route::Home,
            "/projects" => Route::Projects,
            "/profile" => Route::Profile,
            "/resume" => Route::Resume,
            "/contact" => Route::Contact,
            _ => Route::NotFound,
        }
    }

    /// Canonical path of the route. The fallback page has none.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Route::Home => Some("/"),
            Route::Projects => Some("/projects"),
            Route::Profile => Some("/profile"),
            Route::Resume => Some("/resume"),
            Route::Contact => Some("/contact"),
            Route::NotFound => None,
        }
    }

    /// Page heading.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Projects => "Projects",
            Route::Profile => "Profile",
            Route::Resume => "My Resume",
            Route::Contact => "Contact Page",
            Route::NotFound => "Page Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().unwrap_or("*"))
    }
}

/// An entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Link text.
    pub name: &'static str,
    /// Target route.
    pub route: Route,
}

impl NavLink {
    /// Whether this link is highlighted for the current route.
    pub fn is_selected(&self, current: Route) -> bool {
        self.route == current
    }
}

/// Navigation bar entries, in display order.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { name: "Home", route: Route::Home },
    NavLink { name: "Profile", route: Route::Profile },
    NavLink { name: "Projects", route: Route::Projects },
    NavLink { name: "Resume", route: Route::Resume },
    NavLink { name: "Contact Me", route: Route::Contact },
];
