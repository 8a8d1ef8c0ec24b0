use serde_json::json;

use crate::net::test_helpers::{API, signed_in_harness};
use crate::net::transport::RequestBody;
use crate::net::types::NewGoal;

#[tokio::test]
async fn create_goal_omits_unset_optionals() {
    let h = signed_in_harness("tok");
    h.transport
        .push_json(200, json!({"id": 1, "name": "Laptop", "target_amount": 1200.0, "current_amount": 0.0}));

    let goal = h
        .client
        .create_goal(&NewGoal { name: "Laptop".into(), target_amount: 1200.0, deadline: None, icon: None })
        .await
        .unwrap();

    assert_eq!(goal.id, "1");
    let req = h.transport.last();
    assert_eq!(req.url, format!("{API}/goals"));
    assert_eq!(req.body, RequestBody::Json(json!({"name": "Laptop", "target_amount": 1200.0})));
}

#[tokio::test]
async fn contribute_posts_amount_to_goal() {
    let h = signed_in_harness("tok");
    h.transport
        .push_json(200, json!({"id": 1, "name": "Laptop", "target_amount": 1200.0, "current_amount": 200.0}));

    let goal = h.client.contribute_to_goal("1", 200.0).await.unwrap();

    assert!((goal.current_amount - 200.0).abs() < f64::EPSILON);
    let req = h.transport.last();
    assert_eq!(req.url, format!("{API}/goals/1/contribute"));
    assert_eq!(req.body, RequestBody::Json(json!({"amount": 200.0})));
}
