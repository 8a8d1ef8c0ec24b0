//! Application location and navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API client forces navigation to the login route on 401, and the auth
//! flows navigate after login/logout. Both go through [`Navigator`] so the
//! front end decides what "navigate" means (a browser location change, a
//! terminal prompt, or a recorded step in tests).

use std::sync::{Mutex, PoisonError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Auth,
    Dashboard,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Auth => "/auth",
            Self::Dashboard => "/dashboard",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Home),
            "/auth" => Some(Self::Auth),
            "/dashboard" => Some(Self::Dashboard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

pub trait Navigator: Send + Sync {
    /// Replace the current location.
    fn navigate(&self, route: Route);
}

/// In-memory location with history.
#[derive(Debug)]
pub struct MemoryNavigator {
    history: Mutex<Vec<Route>>,
}

impl MemoryNavigator {
    #[must_use]
    pub fn new(start: Route) -> Self {
        Self { history: Mutex::new(vec![start]) }
    }

    #[must_use]
    pub fn current(&self) -> Route {
        let history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        history.last().copied().unwrap_or(Route::Home)
    }

    #[must_use]
    pub fn history(&self) -> Vec<Route> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = route.path(), "navigate");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod tests;
