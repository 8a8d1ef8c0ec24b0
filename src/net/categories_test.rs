use serde_json::json;

use crate::net::test_helpers::{API, signed_in_harness};
use crate::net::transport::{Method, RequestBody};
use crate::net::types::{DEFAULT_COLOR, NewCategory, TransactionType};

fn category_json(id: &str, system: &str) -> serde_json::Value {
    json!({
        "id": id, "user_id": null, "name": "Food", "type": "expense", "color": "#ef4444",
        "icon": null, "is_system": system, "created_at": "2025-01-01T00:00:00"
    })
}

#[tokio::test]
async fn list_without_type_sends_no_query() {
    let h = signed_in_harness("tok");
    h.transport.push_json(200, json!([category_json("c-1", "true")]));

    let rows = h.client.list_categories(None).await.unwrap();

    assert!(rows[0].is_system);
    let req = h.transport.last();
    assert_eq!(req.url, format!("{API}/categories"));
    assert!(req.query.is_empty());
}

#[tokio::test]
async fn list_with_type_filters() {
    let h = signed_in_harness("tok");
    h.transport.push_json(200, json!([]));

    h.client.list_categories(Some(TransactionType::Income)).await.unwrap();

    assert_eq!(h.transport.last().query, vec![("type".into(), "income".into())]);
}

#[tokio::test]
async fn create_and_delete() {
    let h = signed_in_harness("tok");
    h.transport.push_json(201, category_json("c-2", "false"));
    h.transport.push_status(204);

    let created = h
        .client
        .create_category(&NewCategory {
            name: "Pets".into(),
            kind: TransactionType::Expense,
            color: DEFAULT_COLOR.into(),
            icon: None,
        })
        .await
        .unwrap();
    h.client.delete_category(&created.id).await.unwrap();

    let reqs = h.transport.requests();
    assert_eq!(
        reqs[0].body,
        RequestBody::Json(json!({"name": "Pets", "type": "expense", "color": "#10b981"}))
    );
    assert_eq!(reqs[1].method, Method::DELETE);
    assert_eq!(reqs[1].url, format!("{API}/categories/c-2"));
}
