use serde_json::json;

use super::*;
use crate::forms::ValidationError;

#[test]
fn success_and_error_titles() {
    let ok = Notice::success("Budget added successfully");
    assert_eq!(ok.title, "Success");
    assert!(!ok.is_error());
    assert_eq!(ok.to_string(), "Success: Budget added successfully");

    assert_eq!(Notice::error("Failed to add budget").title, "Error");
}

#[test]
fn from_error_prefers_backend_detail() {
    let err = ApiError::Response { status: 400, payload: Some(json!({"detail": "Email already registered"})) };
    assert_eq!(Notice::from_error(&err, "Something went wrong.").description, "Email already registered");

    let err = ApiError::Response { status: 500, payload: None };
    assert_eq!(Notice::from_error(&err, "Something went wrong.").description, "Something went wrong.");
}

#[test]
fn validation_errors_speak_for_themselves() {
    let err = ApiError::from(ValidationError::InvalidAmount);
    let notice = Notice::from_error(&err, "ignored");
    assert!(notice.is_error());
    assert_eq!(notice.description, "Please enter a valid amount");
}
