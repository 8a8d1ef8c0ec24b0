//! Navigation chrome: which call to action the header shows.

use tokio::sync::watch;

use crate::nav::Route;
use crate::session::SessionService;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Signed in: offer to log out.
    Logout,
    /// Signed out: offer the auth page.
    GetStarted,
}

impl NavAction {
    #[must_use]
    pub fn for_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.is_empty() => Self::Logout,
            _ => Self::GetStarted,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Logout => "Logout",
            Self::GetStarted => "Get Started",
        }
    }

    /// Where the affordance leads once activated.
    #[must_use]
    pub fn target(self) -> Route {
        match self {
            Self::Logout => Route::Home,
            Self::GetStarted => Route::Auth,
        }
    }
}

/// Tracks the session so the header updates on login, logout and forced
/// logout alike.
#[derive(Debug)]
pub struct NavChrome {
    changes: watch::Receiver<Option<String>>,
}

impl NavChrome {
    #[must_use]
    pub fn new(session: &SessionService) -> Self {
        Self { changes: session.subscribe() }
    }

    #[must_use]
    pub fn action(&self) -> NavAction {
        NavAction::for_token(self.changes.borrow().as_deref())
    }

    /// Wait for the next session change. `None` once the session service is
    /// gone.
    pub async fn changed(&mut self) -> Option<NavAction> {
        self.changes.changed().await.ok()?;
        Some(NavAction::for_token(self.changes.borrow_and_update().as_deref()))
    }
}

#[cfg(test)]
#[path = "chrome_test.rs"]
mod tests;
