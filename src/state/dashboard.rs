//! Dashboard entry flow.
//!
//! Order of checks on entry:
//! 1. no stored token: go to `/auth` without touching the network;
//! 2. current user, then profile (a 404 here means first-time setup);
//! 3. summary, then insights (an insights failure only empties the panel).

use crate::error::ApiError;
use crate::nav::Route;
use crate::net::ApiClient;
use crate::net::types::{AiInsight, DashboardSummary, Profile, User};
use crate::scope::ViewScope;

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub user: User,
    pub profile: Profile,
    pub summary: DashboardSummary,
    pub insights: Vec<AiInsight>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardLoad {
    /// Not signed in; the navigator was sent to `/auth`.
    Redirected,
    /// Signed in without a financial profile; show the setup form.
    NeedsProfile { user: User },
    Ready(Box<DashboardData>),
}

/// Run the entry flow inside `scope`.
///
/// # Errors
///
/// Returns the first failing call other than the profile 404 and insights, or
/// [`ApiError::Cancelled`] if the scope closes first.
pub async fn load_dashboard(client: &ApiClient, scope: &ViewScope) -> Result<DashboardLoad, ApiError> {
    if !client.session().is_authenticated() {
        tracing::debug!("dashboard without session; redirecting");
        client.navigator().navigate(Route::Auth);
        return Ok(DashboardLoad::Redirected);
    }

    let user = scope.run(client.current_user()).await?;
    let profile = match scope.run(client.get_profile()).await {
        Ok(profile) => profile,
        Err(err) if err.is_not_found() => {
            tracing::info!(user_id = %user.id, "no profile yet; entering setup");
            return Ok(DashboardLoad::NeedsProfile { user });
        }
        Err(err) => return Err(err),
    };

    let summary = scope.run(client.dashboard_summary()).await?;
    let insights = match scope.run(client.ai_insights()).await {
        Ok(response) => response.insights,
        Err(ApiError::Cancelled) => return Err(ApiError::Cancelled),
        Err(error) => {
            tracing::warn!(%error, "insights unavailable");
            Vec::new()
        }
    };

    Ok(DashboardLoad::Ready(Box::new(DashboardData { user, profile, summary, insights })))
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
