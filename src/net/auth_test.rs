use serde_json::json;

use crate::net::test_helpers::{AUTH, harness};
use crate::net::transport::{Method, RequestBody};

#[tokio::test]
async fn login_posts_oauth_form_to_auth_base() {
    let h = harness();
    h.transport
        .push_json(200, json!({"access_token": "t1", "token_type": "bearer", "user_uuid": "u-1"}));

    let token = h.client.login("a@b.com", "password123").await.unwrap();

    assert_eq!(token.access_token, "t1");
    let req = h.transport.last();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.url, format!("{AUTH}/login"));
    assert_eq!(req.header("content-type"), Some("application/x-www-form-urlencoded"));
    assert_eq!(
        req.body,
        RequestBody::Form(vec![
            ("username".into(), "a@b.com".into()),
            ("password".into(), "password123".into()),
        ])
    );
}

#[tokio::test]
async fn signup_sends_json_and_tolerates_missing_token() {
    let h = harness();
    h.transport
        .push_json(200, json!({"id": "u-1", "username": "Ada", "email": "ada@b.com"}));

    let created = h.client.signup("Ada", "ada@b.com", "password123").await.unwrap();

    assert_eq!(created.access_token, None);
    let req = h.transport.last();
    assert_eq!(req.url, format!("{AUTH}/signup"));
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(
        req.body,
        RequestBody::Json(json!({"username": "Ada", "email": "ada@b.com", "password": "password123"}))
    );
}

#[tokio::test]
async fn google_login_wraps_credential() {
    let h = harness();
    h.transport.push_json(200, json!({"access_token": "g1", "token_type": "bearer"}));

    let token = h.client.google_login("id-token").await.unwrap();

    assert_eq!(token.access_token, "g1");
    assert_eq!(h.transport.last().body, RequestBody::Json(json!({"credential": "id-token"})));
}

#[tokio::test]
async fn rejected_login_surfaces_backend_detail() {
    let h = harness();
    h.transport.push_json(400, json!({"detail": "Invalid credentials"}));

    let err = h.client.login("a@b.com", "wrongpass1").await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
}

#[tokio::test]
async fn current_user_hits_me() {
    let h = harness();
    h.transport
        .push_json(200, json!({"id": "u-1", "username": "Ada", "email": "ada@b.com"}));

    let user = h.client.current_user().await.unwrap();

    assert_eq!(user.username, "Ada");
    assert_eq!(h.transport.last().url, format!("{AUTH}/me"));
    assert_eq!(h.transport.last().method, Method::GET);
}
