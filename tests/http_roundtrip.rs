//! End-to-end checks of the reqwest transport against an in-process backend.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Form, Json, Router};
use fintrack::forms::LoginForm;
use fintrack::net::ReqwestTransport;
use fintrack::state::auth;
use fintrack::{ApiClient, ClientConfig, FileStorage, MemoryNavigator, Navigator, Route, SessionService};
use serde_json::json;

const TOKEN: &str = "t1";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

async fn login(headers: HeaderMap, Form(form): Form<HashMap<String, String>>) -> impl IntoResponse {
    let form_encoded = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"));
    let ok = form_encoded
        && form.get("username").map(String::as_str) == Some("a@b.com")
        && form.get("password").map(String::as_str) == Some("password123");
    if !ok {
        return (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Invalid credentials"})));
    }
    (StatusCode::OK, Json(json!({"access_token": TOKEN, "token_type": "bearer", "user_uuid": "u-1"})))
}

async fn me(headers: HeaderMap) -> impl IntoResponse {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Not authenticated"})));
    }
    (StatusCode::OK, Json(json!({"id": "u-1", "username": "Ada", "email": "a@b.com"})))
}

async fn transactions(headers: HeaderMap, Query(query): Query<HashMap<String, String>>) -> impl IntoResponse {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Not authenticated"})));
    }
    let description = format!(
        "month={} year={}",
        query.get("month").cloned().unwrap_or_default(),
        query.get("year").cloned().unwrap_or_default()
    );
    (
        StatusCode::OK,
        Json(json!([{
            "id": "t-1", "user_id": "u-1", "type": "expense", "description": description,
            "category": "Food", "amount": 9.5, "date": "2025-03-02T00:00:00",
            "created_at": "2025-03-02T00:00:00", "updated_at": "2025-03-02T00:00:00"
        }])),
    )
}

async fn delete_transaction(Path(id): Path<String>) -> StatusCode {
    if id == "t-1" { StatusCode::NO_CONTENT } else { StatusCode::NOT_FOUND }
}

async fn budgets() -> impl IntoResponse {
    (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Token expired"})))
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        .route("/api/transactions", get(transactions))
        .route("/api/transactions/{id}", delete(delete_transaction))
        .route("/api/budgets", get(budgets));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

struct Fixture {
    client: ApiClient,
    session: SessionService,
    nav: Arc<MemoryNavigator>,
    session_file: std::path::PathBuf,
    _dir: tempfile::TempDir,
}

async fn fixture() -> Fixture {
    let root = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");
    let config = ClientConfig::for_server(&root, session_file.clone());
    let session = SessionService::new(Arc::new(FileStorage::new(session_file.clone())));
    let nav = Arc::new(MemoryNavigator::new(Route::Auth));
    let client = ApiClient::new(&config, Arc::new(ReqwestTransport::new().unwrap()), session.clone(), nav.clone());
    Fixture { client, session, nav, session_file, _dir: dir }
}

#[tokio::test]
async fn login_persists_token_to_file_and_authenticates_me() {
    let f = fixture().await;

    auth::login(&f.client, &LoginForm { email: "a@b.com".into(), password: "password123".into() })
        .await
        .unwrap();
    let user = f.client.current_user().await.unwrap();

    assert_eq!(user.username, "Ada");
    assert_eq!(f.nav.current(), Route::Dashboard);
    let stored = std::fs::read_to_string(&f.session_file).unwrap();
    assert!(stored.contains("\"access_token\""));
    assert!(stored.contains(TOKEN));
}

#[tokio::test]
async fn query_and_empty_delete_round_trip() {
    let f = fixture().await;
    f.session.set_token(TOKEN).unwrap();

    let rows = f
        .client
        .list_transactions(&fintrack::net::types::TransactionQuery::for_month(3, 2025))
        .await
        .unwrap();
    f.client.delete_transaction("t-1").await.unwrap();
    let missing = f.client.delete_transaction("t-2").await.unwrap_err();

    assert_eq!(rows[0].description, "month=3 year=2025");
    assert!(missing.is_not_found());
}

#[tokio::test]
async fn unauthorized_response_clears_file_session() {
    let f = fixture().await;
    f.session.set_token("stale").unwrap();
    f.nav.navigate(Route::Dashboard);

    let err = f.client.list_budgets().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.detail().as_deref(), Some("Token expired"));
    assert_eq!(f.session.token(), None);
    assert_eq!(f.nav.current(), Route::Auth);
    let stored = std::fs::read_to_string(&f.session_file).unwrap();
    assert!(!stored.contains("stale"));
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = ClientConfig::for_server("http://127.0.0.1:9", dir.path().join("s.json"));
    let client = ApiClient::new(
        &config,
        Arc::new(ReqwestTransport::new().unwrap()),
        SessionService::in_memory(),
        Arc::new(MemoryNavigator::default()),
    );

    let err = client.current_user().await.unwrap_err();

    assert!(matches!(err, fintrack::ApiError::Transport(_)));
}
