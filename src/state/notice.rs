//! Transient user-facing notices (the toast messages of the app).

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub level: NoticeLevel,
}

impl Notice {
    #[must_use]
    pub fn success(description: impl Into<String>) -> Self {
        Self::titled("Success", description, NoticeLevel::Success)
    }

    #[must_use]
    pub fn titled(title: impl Into<String>, description: impl Into<String>, level: NoticeLevel) -> Self {
        Self { title: title.into(), description: description.into(), level }
    }

    #[must_use]
    pub fn error(description: impl Into<String>) -> Self {
        Self::titled("Error", description, NoticeLevel::Error)
    }

    /// Error notice for a failed call, preferring the backend's own message.
    #[must_use]
    pub fn from_error(err: &ApiError, fallback: &str) -> Self {
        Self::error(err.user_message(fallback))
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

#[cfg(test)]
#[path = "notice_test.rs"]
mod tests;
