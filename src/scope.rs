//! Request lifetimes tied to the view that issued them.
//!
//! DESIGN
//! ======
//! A view owns one [`ViewScope`]. Work started through the scope races a
//! cancellation signal: when the view goes away (the scope is dropped or
//! cancelled explicitly) pending calls resolve to [`ApiError::Cancelled`] and
//! their request futures are dropped. Results that still arrive are only
//! applied through [`ScopeHandle::apply`], which refuses once the scope is
//! gone, so a late response never writes into torn-down state.

use std::future::Future;

use tokio::sync::watch;

use crate::error::ApiError;

#[derive(Debug)]
pub struct ViewScope {
    cancel: watch::Sender<bool>,
}

/// Cheap handle that outlives borrows of the scope, for spawned work.
#[derive(Clone, Debug)]
pub struct ScopeHandle {
    cancelled: watch::Receiver<bool>,
}

impl ViewScope {
    #[must_use]
    pub fn new() -> Self {
        let (cancel, _) = watch::channel(false);
        Self { cancel }
    }

    #[must_use]
    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle { cancelled: self.cancel.subscribe() }
    }

    /// Cancel everything started through this scope. Idempotent.
    pub fn cancel(&self) {
        let changed = self.cancel.send_if_modified(|cancelled| !std::mem::replace(cancelled, true));
        if changed {
            tracing::debug!("view scope cancelled");
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow()
    }

    /// Race `fut` against this scope's cancellation.
    pub fn run<F, T>(&self, fut: F) -> impl Future<Output = Result<T, ApiError>> + use<F, T>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        self.handle().run(fut)
    }

    /// Run `update` only while the scope is live.
    pub fn apply<T, R>(&self, value: T, update: impl FnOnce(T) -> R) -> Option<R> {
        if self.is_cancelled() {
            return None;
        }
        Some(update(value))
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl ScopeHandle {
    /// False once the owning scope was cancelled or dropped.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.cancelled.has_changed().is_ok() && !*self.cancelled.borrow()
    }

    pub async fn run<F, T>(mut self, fut: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        tokio::select! {
            biased;
            () = wait_cancelled(&mut self.cancelled) => Err(ApiError::Cancelled),
            result = fut => result,
        }
    }

    pub fn apply<T, R>(&self, value: T, update: impl FnOnce(T) -> R) -> Option<R> {
        if !self.is_live() {
            tracing::debug!("dropping result for a closed view");
            return None;
        }
        Some(update(value))
    }
}

async fn wait_cancelled(rx: &mut watch::Receiver<bool>) {
    loop {
        if *rx.borrow_and_update() {
            return;
        }
        // Sender dropped means the scope is gone.
        if rx.changed().await.is_err() {
            return;
        }
    }
}

#[cfg(test)]
#[path = "scope_test.rs"]
mod tests;
