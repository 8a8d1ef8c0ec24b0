use serde_json::{Value, json};

pub(crate) fn user() -> Value {
    json!({"id": "u-1", "username": "Ada", "email": "a@b.com"})
}

pub(crate) fn profile() -> Value {
    json!({
        "id": "p-1", "user_id": "u-1", "initial_balance": 1000.0, "monthly_budget": 500.0,
        "currency": "INR", "created_at": "2025-01-01T00:00:00", "updated_at": "2025-01-01T00:00:00"
    })
}

pub(crate) fn summary() -> Value {
    json!({
        "stats": {
            "total_balance": 900.0, "total_income": 1000.0, "total_expenses": 100.0,
            "budget_left": 400.0, "income_change_percent": 0.0,
            "expense_change_percent": 0.0, "budget_usage_percent": 20.0
        },
        "category_breakdown": [],
        "monthly_trend": [],
        "recent_transactions": []
    })
}

pub(crate) fn transaction(id: &str, kind: &str, description: &str, category: &str, amount: f64) -> Value {
    json!({
        "id": id, "user_id": "u-1", "type": kind, "description": description,
        "category": category, "amount": amount, "date": "2025-03-02T00:00:00",
        "created_at": "2025-03-02T00:00:00", "updated_at": "2025-03-02T00:00:00"
    })
}

pub(crate) fn budget(id: &str, category: &str, limit: f64, spent: f64) -> Value {
    json!({
        "id": id, "user_id": "u-1", "category": category, "limit_amount": limit,
        "period": "monthly", "spent_amount": spent,
        "start_date": "2025-03-01T00:00:00", "end_date": "2025-03-31T00:00:00",
        "created_at": "2025-03-01T00:00:00", "updated_at": "2025-03-01T00:00:00"
    })
}

pub(crate) fn goal(id: i64, name: &str, target: f64, current: f64) -> Value {
    json!({"id": id, "name": name, "target_amount": target, "current_amount": current})
}
