//! Sign-in, sign-up and sign-out.
//!
//! A successful flow persists the token before it returns, so the very next
//! request made through the client is already authenticated.

use crate::error::ApiError;
use crate::forms::{LoginForm, SignupForm, ValidationError};
use crate::nav::Route;
use crate::net::ApiClient;
use crate::net::types::User;

/// Which variant of the auth page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

/// Validate, log in, persist the token, and go to the dashboard.
///
/// # Errors
///
/// Returns a validation error without issuing a request, or the backend
/// failure.
pub async fn login(client: &ApiClient, form: &LoginForm) -> Result<(), ApiError> {
    form.validate()?;
    let token = client.login(form.email.trim(), &form.password).await?;
    client.session().set_token(&token.access_token)?;
    tracing::info!("signed in");
    client.navigator().navigate(Route::Dashboard);
    Ok(())
}

/// Validate, create the account, and sign in.
///
/// The backend may answer signup without a token; the same credentials are
/// then exchanged through the login endpoint.
///
/// # Errors
///
/// Returns a validation error without issuing a request, or the backend
/// failure of either call.
pub async fn signup(client: &ApiClient, form: &SignupForm) -> Result<User, ApiError> {
    form.validate()?;
    let email = form.email.trim();
    let created = client.signup(form.username.trim(), email, &form.password).await?;
    let token = match created.access_token.filter(|t| !t.is_empty()) {
        Some(token) => token,
        None => client.login(email, &form.password).await?.access_token,
    };
    client.session().set_token(&token)?;
    tracing::info!(user_id = %created.id, "account created");
    client.navigator().navigate(Route::Dashboard);
    Ok(User { id: created.id, username: created.username, email: created.email })
}

/// Exchange a Google ID token for a session.
///
/// # Errors
///
/// Returns [`ValidationError::MissingCredential`] for an empty credential,
/// or the backend failure.
pub async fn google_login(client: &ApiClient, credential: &str) -> Result<(), ApiError> {
    let credential = credential.trim();
    if credential.is_empty() {
        return Err(ValidationError::MissingCredential.into());
    }
    let token = client.google_login(credential).await?;
    client.session().set_token(&token.access_token)?;
    tracing::info!("signed in with google");
    client.navigator().navigate(Route::Dashboard);
    Ok(())
}

/// Drop the session and return to the landing page.
///
/// # Errors
///
/// Returns an error if the stored token cannot be removed.
pub fn logout(client: &ApiClient) -> Result<(), ApiError> {
    client.session().clear()?;
    client.navigator().navigate(Route::Home);
    Ok(())
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
