//! Route guard
//!
//! Decides which screen a route renders given only whether a session is
//! present. Authenticated users are sent to search; everyone else ends up on
//! login or register.

use std::fmt;

/// Screens the client can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Search,
}

/// Routes the client knows about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Register,
    Search,
    /// Any other path
    Unknown(String),
}

impl Route {
    /// Parse a route path. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "" => Route::Root,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/recipe-search" | "/search" => Route::Search,
            _ => Route::Unknown(trimmed.to_string()),
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> &str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Search => "/recipe-search",
            Route::Unknown(path) => path,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Login => Route::Login,
            Screen::Register => Route::Register,
            Screen::Search => Route::Search,
        }
    }
}

/// Outcome of resolving a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Screen),
    Redirect(Route),
}

/// Resolve a route against the current authentication state.
pub fn resolve(route: &Route, authenticated: bool) -> Navigation {
    match (route, authenticated) {
        (Route::Root, true) => Navigation::Redirect(Route::Search),
        (Route::Root, false) => Navigation::Redirect(Route::Login),
        (Route::Login, true) | (Route::Register, true) => Navigation::Redirect(Route::Search),
        (Route::Login, false) => Navigation::Render(Screen::Login),
        (Route::Register, false) => Navigation::Render(Screen::Register),
        (Route::Search, true) => Navigation::Render(Screen::Search),
        (Route::Search, false) => Navigation::Redirect(Route::Login),
        (Route::Unknown(_), _) => Navigation::Redirect(Route::Login),
    }
}

/// Follow redirects until a screen renders.
///
/// Redirects settle within two hops; the loop bound only guards against a
/// broken table.
pub fn land(route: &Route, authenticated: bool) -> Screen {
    let mut current = route.clone();
    for _ in 0..4 {
        match resolve(&current, authenticated) {
            Navigation::Render(screen) => return screen,
            Navigation::Redirect(next) => current = next,
        }
    }
    Screen::Login
}
