//! Envelope assertions
//!
//! Every API answer is `200 OK` with an `{errorCode, data}` body; these
//! helpers check both at once.

use axum::http::StatusCode;
use axum_test::TestResponse;
use serde_json::Value;

/// Assert a `200 OK` envelope with the given `errorCode` and return the body
pub fn assert_envelope(response: &TestResponse, error_code: i64) -> Value {
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body["errorCode"].as_i64(),
        Some(error_code),
        "unexpected envelope: {body}"
    );
    body
}

/// Assert an envelope with the given `errorCode` and string `data`
pub fn assert_message(response: &TestResponse, error_code: i64, message: &str) -> Value {
    let body = assert_envelope(response, error_code);
    assert_eq!(body["data"].as_str(), Some(message), "unexpected envelope: {body}");
    body
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
