//! Client configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_AUTH_URL: &str = "http://127.0.0.1:8000/auth";
pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A base URL was not an absolute http(s) URL.
    #[error("invalid base URL for {var}: {value}")]
    InvalidBaseUrl { var: &'static str, value: String },

    /// No session file was configured and no platform config directory exists.
    #[error("cannot locate a config directory; set FINTRACK_SESSION_FILE")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL for resource endpoints (profile, transactions, budgets, ...).
    pub api_url: String,
    /// Base URL for the auth endpoints (login, signup, google, me).
    pub auth_url: String,
    /// File backing the persisted session token.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `FINTRACK_API_URL`: default `http://127.0.0.1:8000/api`
    /// - `FINTRACK_AUTH_URL`: default `http://127.0.0.1:8000/auth`
    /// - `FINTRACK_SESSION_FILE`: default `<config_dir>/fintrack/session.json`
    ///
    /// # Errors
    ///
    /// Returns an error if a base URL is malformed or no session location can
    /// be determined.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = normalize_base_url(
            "FINTRACK_API_URL",
            &std::env::var("FINTRACK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned()),
        )?;
        let auth_url = normalize_base_url(
            "FINTRACK_AUTH_URL",
            &std::env::var("FINTRACK_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_owned()),
        )?;
        let session_file = match std::env::var("FINTRACK_SESSION_FILE").ok().filter(|s| !s.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_session_file()?,
        };

        Ok(Self { api_url, auth_url, session_file })
    }

    /// Config pointing both bases at one server root, e.g. a test backend.
    #[must_use]
    pub fn for_server(root: &str, session_file: PathBuf) -> Self {
        let root = root.trim_end_matches('/');
        Self { api_url: format!("{root}/api"), auth_url: format!("{root}/auth"), session_file }
    }
}

/// Validate the scheme and strip trailing slashes so paths join cleanly.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBaseUrl`] for anything that is not an
/// absolute `http://` or `https://` URL with a host.
pub fn normalize_base_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));
    match rest {
        Some(host) if !host.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(ConfigError::InvalidBaseUrl { var, value: raw.to_owned() }),
    }
}

/// `<config_dir>/fintrack/session.json` for the current platform.
///
/// # Errors
///
/// Returns [`ConfigError::NoConfigDir`] when the platform has no config
/// directory.
pub fn default_session_file() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join("fintrack").join(SESSION_FILE_NAME))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
