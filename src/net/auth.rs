//! Auth endpoints under the auth base URL.
//!
//! These wrappers only talk to the backend. Persisting the issued token and
//! navigating afterwards is the job of `state::auth`.

use super::client::{ApiClient, Base, decode};
use super::transport::{HttpRequest, Method};
use super::types::{GoogleCredential, SignupRequest, SignupResponse, TokenResponse, User};
use crate::error::ApiError;

impl ApiClient {
    /// Exchange credentials for a token via `POST /auth/login`.
    ///
    /// The backend uses the OAuth2 password form, so the email travels as
    /// `username` in a form-urlencoded body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credentials are rejected.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let request = HttpRequest::new(Method::POST, self.url(Base::Auth, "login")).with_form(vec![
            ("username".to_owned(), email.to_owned()),
            ("password".to_owned(), password.to_owned()),
        ]);
        decode(&self.send(request).await?)
    }

    /// Register a new account via `POST /auth/signup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the
    /// account (e.g. email already registered).
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> Result<SignupResponse, ApiError> {
        let body = SignupRequest {
            username: username.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        self.send_json(Method::POST, Base::Auth, "signup", &body).await
    }

    /// Exchange a Google ID token via `POST /auth/google`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credential is rejected.
    pub async fn google_login(&self, credential: &str) -> Result<TokenResponse, ApiError> {
        let body = GoogleCredential { credential: credential.to_owned() };
        self.send_json(Method::POST, Base::Auth, "google", &body).await
    }

    /// Fetch the signed-in user via `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; 401 also forces logout.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get(Base::Auth, "me", Vec::new()).await
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
