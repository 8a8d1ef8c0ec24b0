//! First-time profile setup and later edits.

use crate::error::ApiError;
use crate::forms::ProfileForm;
use crate::net::ApiClient;
use crate::net::types::{Profile, ProfileUpdate};

/// Validate the setup form and create the profile.
///
/// # Errors
///
/// Returns a validation error without issuing a request, or the backend
/// failure (e.g. a profile already exists).
pub async fn complete_setup(client: &ApiClient, form: &ProfileForm) -> Result<Profile, ApiError> {
    let body = form.validate()?;
    let profile = client.create_profile(&body).await?;
    tracing::info!(profile_id = %profile.id, "profile created");
    Ok(profile)
}

/// Validate the form and overwrite both amounts on the existing profile.
///
/// # Errors
///
/// Returns a validation error without issuing a request, or the backend
/// failure.
pub async fn update(client: &ApiClient, form: &ProfileForm) -> Result<Profile, ApiError> {
    let body = form.validate()?;
    let update = ProfileUpdate {
        initial_balance: Some(body.initial_balance),
        monthly_budget: Some(body.monthly_budget),
        currency: body.currency,
    };
    client.update_profile(&update).await
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
