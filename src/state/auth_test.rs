use serde_json::json;

use super::*;
use crate::nav::Route;
use crate::net::test_helpers::{AUTH, harness, signed_in_harness};
use crate::state::fixtures;

fn login_form(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.into(), password: password.into() }
}

#[tokio::test]
async fn login_persists_token_and_next_call_uses_it() {
    let h = harness();
    h.transport.push_json(200, json!({"access_token": "t1", "token_type": "bearer", "user_uuid": "u-1"}));
    h.transport.push_json(200, fixtures::user());

    login(&h.client, &login_form("a@b.com", "password123")).await.unwrap();
    h.client.current_user().await.unwrap();

    assert_eq!(h.session.token().as_deref(), Some("t1"));
    assert_eq!(h.nav.current(), Route::Dashboard);
    let me = h.transport.last();
    assert_eq!(me.url, format!("{AUTH}/me"));
    assert_eq!(me.header("authorization"), Some("Bearer t1"));
}

#[tokio::test]
async fn invalid_login_form_issues_no_request() {
    let h = harness();

    let err = login(&h.client, &login_form("a@b.com", "short")).await.unwrap_err();

    assert!(matches!(err, ApiError::Validation(ValidationError::PasswordTooShort)));
    assert_eq!(h.transport.count(), 0);
    assert_eq!(h.session.token(), None);
}

#[tokio::test]
async fn failed_login_keeps_user_on_auth_page() {
    let h = harness();
    h.transport.push_json(400, json!({"detail": "Invalid credentials"}));

    let err = login(&h.client, &login_form("a@b.com", "password123")).await.unwrap_err();

    assert_eq!(err.user_message("Something went wrong."), "Invalid credentials");
    assert_eq!(h.session.token(), None);
    assert_eq!(h.nav.history(), vec![Route::Dashboard]);
}

#[tokio::test]
async fn signup_without_token_falls_back_to_login() {
    let h = harness();
    h.transport.push_json(200, fixtures::user());
    h.transport.push_json(200, json!({"access_token": "t2", "token_type": "bearer", "user_uuid": "u-1"}));

    let form = SignupForm { username: "Ada".into(), email: "a@b.com".into(), password: "password123".into() };
    let user = signup(&h.client, &form).await.unwrap();

    assert_eq!(user.username, "Ada");
    assert_eq!(h.session.token().as_deref(), Some("t2"));
    let urls: Vec<_> = h.transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls, vec![format!("{AUTH}/signup"), format!("{AUTH}/login")]);
}

#[tokio::test]
async fn signup_with_token_stores_it_directly() {
    let h = harness();
    h.transport
        .push_json(200, json!({"id": "u-1", "username": "Ada", "email": "a@b.com", "access_token": "t3"}));

    let form = SignupForm { username: "Ada".into(), email: "a@b.com".into(), password: "password123".into() };
    signup(&h.client, &form).await.unwrap();

    assert_eq!(h.session.token().as_deref(), Some("t3"));
    assert_eq!(h.transport.count(), 1);
}

#[tokio::test]
async fn google_login_requires_credential() {
    let h = harness();
    let err = google_login(&h.client, "  ").await.unwrap_err();
    assert_eq!(err.user_message(""), "No credential received from Google.");
    assert_eq!(h.transport.count(), 0);

    h.transport.push_json(200, json!({"access_token": "g1", "token_type": "bearer"}));
    google_login(&h.client, "id-token").await.unwrap();
    assert_eq!(h.session.token().as_deref(), Some("g1"));
}

#[test]
fn logout_clears_and_goes_home() {
    let h = signed_in_harness("tok");

    logout(&h.client).unwrap();

    assert_eq!(h.session.token(), None);
    assert_eq!(h.nav.current(), Route::Home);
}

#[test]
fn auth_mode_toggles() {
    assert_eq!(AuthMode::default().toggled(), AuthMode::Signup);
    assert_eq!(AuthMode::Signup.toggled(), AuthMode::Login);
}
