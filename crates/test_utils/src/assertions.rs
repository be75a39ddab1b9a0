//! Custom Test Assertions
//!
//! Assertion helpers over field error lists, either as `FieldErrors` or as
//! the JSON array a 422 response carries.

use serde_json::Value;

use core_kernel::FieldErrors;

/// Asserts that `errors` holds exactly `expected` messages, in order
pub fn assert_messages(errors: &FieldErrors, expected: &[&str]) {
    assert_eq!(
        errors.messages(),
        expected,
        "Unexpected violations: {:?}",
        errors
    );
}

/// Asserts that `errors` has a violation with `field` and `code`
pub fn assert_violation(errors: &FieldErrors, field: &str, code: &str) {
    assert!(
        errors.iter().any(|e| e.field == field && e.code == code),
        "Expected violation {}/{} in {:?}",
        field,
        code,
        errors
    );
}

/// Extracts the messages of a 422 response body, in order
pub fn body_messages(body: &Value) -> Vec<String> {
    body.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|e| e["message"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Asserts that a 422 response body lists exactly `expected`, in order
pub fn assert_body_messages(body: &Value, expected: &[&str]) {
    let actual = body_messages(body);
    assert_eq!(actual, expected, "Unexpected violations in body: {}", body);
}

/// Asserts that a 422 response body has a violation with `field` and `code`
pub fn assert_body_violation(body: &Value, field: &str, code: &str) {
    let found = body
        .as_array()
        .map(|items| items.iter().any(|e| e["field"] == field && e["code"] == code))
        .unwrap_or(false);
    assert!(found, "Expected violation {}/{} in body: {}", field, code, body);
}
