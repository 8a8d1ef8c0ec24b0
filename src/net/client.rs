//! The configured API client.
//!
//! ARCHITECTURE
//! ============
//! One instance is built at startup and cloned into every consumer. Every
//! call funnels through [`ApiClient::send`], which applies the two
//! cross-cutting contracts:
//!
//! - request: read the session token and, when present, attach
//!   `Authorization: Bearer <token>`;
//! - response: on HTTP 401 clear the session and navigate to `/auth`, for
//!   every call site without exception, then reject as usual.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Response`] carrying the decoded body
//! (when it is JSON). Nothing is retried.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, RequestBody, Transport};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::nav::{Navigator, Route};
use crate::session::{FileStorage, SessionService};

const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Which base URL a path is relative to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Base {
    /// Resource endpoints, e.g. `http://127.0.0.1:8000/api`.
    Api,
    /// Auth endpoints, e.g. `http://127.0.0.1:8000/auth`.
    Auth,
}

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    api_url: String,
    auth_url: String,
    transport: Arc<dyn Transport>,
    session: SessionService,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    #[must_use]
    pub fn new(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
        session: SessionService,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                api_url: config.api_url.trim_end_matches('/').to_owned(),
                auth_url: config.auth_url.trim_end_matches('/').to_owned(),
                transport,
                session,
                navigator,
            }),
        }
    }

    /// Production client: reqwest transport and file-backed session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig, navigator: Arc<dyn Navigator>) -> Result<Self, ApiError> {
        let transport = Arc::new(ReqwestTransport::new()?);
        let session = SessionService::new(Arc::new(FileStorage::new(config.session_file.clone())));
        Ok(Self::new(config, transport, session, navigator))
    }

    #[must_use]
    pub fn session(&self) -> &SessionService {
        &self.inner.session
    }

    #[must_use]
    pub fn navigator(&self) -> &dyn Navigator {
        self.inner.navigator.as_ref()
    }

    /// Absolute URL for `path` under `base`.
    #[must_use]
    pub fn url(&self, base: Base, path: &str) -> String {
        let root = match base {
            Base::Api => &self.inner.api_url,
            Base::Auth => &self.inner.auth_url,
        };
        if path.is_empty() {
            return root.clone();
        }
        format!("{root}/{}", path.trim_start_matches('/'))
    }

    // =========================================================================
    // INTERCEPTORS
    // =========================================================================

    /// Send a request through both interceptors.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response arrives and
    /// [`ApiError::Response`] for any non-2xx status.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let request = self.intercept_request(request);
        tracing::debug!(method = %request.method, url = %request.url, "api request");
        let response = self.inner.transport.execute(request).await?;
        self.intercept_response(response)
    }

    fn intercept_request(&self, mut request: HttpRequest) -> HttpRequest {
        let content_type = match request.body {
            RequestBody::Form(_) => FORM_CONTENT_TYPE,
            RequestBody::Empty | RequestBody::Json(_) => JSON_CONTENT_TYPE,
        };
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));

        if let Some(token) = self.inner.session.token() {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    request.headers.insert(AUTHORIZATION, value);
                }
                Err(_) => tracing::warn!("stored session token is not a valid header value; sending unauthenticated"),
            }
        }
        request
    }

    fn intercept_response(&self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        if response.status == 401 {
            self.force_logout();
        }
        if !response.is_success() {
            tracing::warn!(status = response.status, "api request rejected");
            let payload = serde_json::from_str::<Value>(&response.body).ok();
            return Err(ApiError::Response { status: response.status, payload });
        }
        Ok(response)
    }

    fn force_logout(&self) {
        tracing::warn!("session rejected by server; forcing logout");
        if let Err(error) = self.inner.session.clear() {
            tracing::warn!(%error, "failed to clear session after 401");
        }
        self.inner.navigator.navigate(Route::Auth);
    }

    // =========================================================================
    // JSON HELPERS
    // =========================================================================

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        base: Base,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, ApiError> {
        let request = HttpRequest::new(Method::GET, self.url(base, path)).with_query(query);
        decode(&self.send(request).await?)
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, base: Base, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = HttpRequest::new(method, self.url(base, path)).with_json(body);
        decode(&self.send(request).await?)
    }

    pub(crate) async fn delete(&self, base: Base, path: &str) -> Result<(), ApiError> {
        let request = HttpRequest::new(Method::DELETE, self.url(base, path));
        self.send(request).await?;
        Ok(())
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_url", &self.inner.api_url)
            .field("auth_url", &self.inner.auth_url)
            .finish_non_exhaustive()
    }
}

/// Decode a 2xx body; an empty body decodes as JSON `null`.
pub(crate) fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    let text = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
