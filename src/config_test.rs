use super::*;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers hold `env_guard()` so no other test mutates these vars concurrently.
unsafe fn clear_fintrack_env() {
    unsafe {
        std::env::remove_var("FINTRACK_API_URL");
        std::env::remove_var("FINTRACK_AUTH_URL");
        std::env::remove_var("FINTRACK_SESSION_FILE");
    }
}

#[test]
fn from_env_uses_local_backend_defaults() {
    let _env = env_guard();
    unsafe {
        clear_fintrack_env();
        std::env::set_var("FINTRACK_SESSION_FILE", "/tmp/fintrack-test/session.json");
    }

    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.auth_url, DEFAULT_AUTH_URL);
    assert_eq!(cfg.session_file, PathBuf::from("/tmp/fintrack-test/session.json"));

    unsafe { clear_fintrack_env() };
}

#[test]
fn from_env_parses_overrides_and_trims_slashes() {
    let _env = env_guard();
    unsafe {
        clear_fintrack_env();
        std::env::set_var("FINTRACK_API_URL", "https://fin.example.test/api/");
        std::env::set_var("FINTRACK_AUTH_URL", "https://fin.example.test/auth//");
        std::env::set_var("FINTRACK_SESSION_FILE", "/tmp/other.json");
    }

    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.api_url, "https://fin.example.test/api");
    assert_eq!(cfg.auth_url, "https://fin.example.test/auth");

    unsafe { clear_fintrack_env() };
}

#[test]
fn from_env_rejects_non_http_base() {
    let _env = env_guard();
    unsafe {
        clear_fintrack_env();
        std::env::set_var("FINTRACK_API_URL", "ftp://fin.example.test");
        std::env::set_var("FINTRACK_SESSION_FILE", "/tmp/other.json");
    }

    let err = ClientConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("FINTRACK_API_URL"));

    unsafe { clear_fintrack_env() };
}

#[test]
fn normalize_base_url_requires_host() {
    assert!(normalize_base_url("X", "http://").is_err());
    assert!(normalize_base_url("X", "127.0.0.1:8000").is_err());
    assert_eq!(normalize_base_url("X", " http://localhost:8000/ ").unwrap(), "http://localhost:8000");
}

#[test]
fn for_server_derives_both_bases() {
    let cfg = ClientConfig::for_server("http://127.0.0.1:9999/", PathBuf::from("s.json"));
    assert_eq!(cfg.api_url, "http://127.0.0.1:9999/api");
    assert_eq!(cfg.auth_url, "http://127.0.0.1:9999/auth");
}
