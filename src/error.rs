//! Client error taxonomy.
//!
//! DESIGN
//! ======
//! Two kinds of failure exist: local validation (caught before any request is
//! issued) and backend-reported failure (a rejected call). Backend failures
//! keep the decoded response payload so callers can surface the server's own
//! message and fall back to a generic one when there is none.

use serde_json::Value;

use crate::forms::ValidationError;
use crate::net::transport::TransportError;
use crate::session::SessionError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input rejected before any network call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(#[from] TransportError),

    /// The backend answered with a non-2xx status.
    #[error("server returned HTTP {status}")]
    Response { status: u16, payload: Option<Value> },

    /// A 2xx body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The persisted session could not be read or written.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The owning view went away before the call completed.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// HTTP status for backend-reported failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Human-readable message from the backend payload, if it carries one.
    ///
    /// Understands `{"detail": "..."}`, FastAPI validation lists
    /// (`{"detail": [{"msg": "..."}]}`) and `{"message": "..."}`.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Response { payload: Some(payload), .. } => payload_message(payload),
            _ => None,
        }
    }

    /// Message suitable for a user-facing notice.
    ///
    /// Validation errors always speak for themselves; backend failures use the
    /// payload detail and otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            _ => self.detail().unwrap_or_else(|| fallback.to_owned()),
        }
    }
}

pub(crate) fn payload_message(payload: &Value) -> Option<String> {
    match payload.get("detail") {
        Some(Value::String(text)) if !text.trim().is_empty() => return Some(text.clone()),
        Some(Value::Array(items)) => {
            if let Some(msg) = items
                .iter()
                .find_map(|item| item.get("msg").and_then(Value::as_str))
            {
                return Some(msg.to_owned());
            }
        }
        _ => {}
    }
    payload
        .get("message")
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
