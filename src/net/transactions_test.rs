use serde_json::json;

use crate::net::test_helpers::{API, signed_in_harness};
use crate::net::transport::{Method, RequestBody};
use crate::net::types::{NewTransaction, TransactionQuery, TransactionType, TransactionUpdate};

fn tx_json(id: &str) -> serde_json::Value {
    json!({
        "id": id, "user_id": "u-1", "type": "expense", "description": "Coffee",
        "category": "Food", "amount": 3.5, "date": "2025-03-02T08:00:00",
        "created_at": "2025-03-02T08:00:00", "updated_at": "2025-03-02T08:00:00"
    })
}

#[tokio::test]
async fn list_forwards_month_filter_as_query() {
    let h = signed_in_harness("tok");
    h.transport.push_json(200, json!([tx_json("t-1"), tx_json("t-2")]));

    let rows = h
        .client
        .list_transactions(&TransactionQuery::for_month(3, 2025))
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    let req = h.transport.last();
    assert_eq!(req.url, format!("{API}/transactions"));
    assert_eq!(req.query, vec![("month".into(), "3".into()), ("year".into(), "2025".into())]);
}

#[tokio::test]
async fn create_posts_json_body() {
    let h = signed_in_harness("tok");
    h.transport.push_json(201, tx_json("t-9"));

    let created = h
        .client
        .create_transaction(&NewTransaction {
            kind: TransactionType::Expense,
            description: "Coffee".into(),
            category: "Food".into(),
            amount: 3.5,
            date: None,
        })
        .await
        .unwrap();

    assert_eq!(created.id, "t-9");
    let req = h.transport.last();
    assert_eq!(req.method, Method::POST);
    assert_eq!(
        req.body,
        RequestBody::Json(json!({"type": "expense", "description": "Coffee", "category": "Food", "amount": 3.5}))
    );
}

#[tokio::test]
async fn get_update_and_delete_address_item_path() {
    let h = signed_in_harness("tok");
    h.transport.push_json(200, tx_json("t-1"));
    h.transport.push_json(200, tx_json("t-1"));
    h.transport.push_status(204);

    h.client.get_transaction("t-1").await.unwrap();
    h.client
        .update_transaction("t-1", &TransactionUpdate { amount: Some(4.0), ..TransactionUpdate::default() })
        .await
        .unwrap();
    h.client.delete_transaction("t-1").await.unwrap();

    let reqs = h.transport.requests();
    let seen: Vec<_> = reqs.iter().map(|r| (r.method.clone(), r.url.clone())).collect();
    let item = format!("{API}/transactions/t-1");
    assert_eq!(
        seen,
        vec![(Method::GET, item.clone()), (Method::PUT, item.clone()), (Method::DELETE, item)]
    );
}

#[tokio::test]
async fn delete_of_unknown_id_reports_status() {
    let h = signed_in_harness("tok");
    h.transport.push_json(404, json!({"detail": "Transaction not found"}));

    let err = h.client.delete_transaction("nope").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.detail().as_deref(), Some("Transaction not found"));
}
