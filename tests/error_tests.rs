// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use financefreedom::error::{extract_message, ApiError, SESSION_EXPIRED_MESSAGE};

#[test]
fn unauthorized_ignores_body() {
    for body in [None, Some("{}"), Some(r#"{"error":"Token revoked"}"#), Some("<html>")] {
        assert_eq!(extract_message(401, body), SESSION_EXPIRED_MESSAGE);
    }
}

#[test]
fn backend_error_field_wins() {
    assert_eq!(
        extract_message(422, Some(r#"{"error":"Invalid category"}"#)),
        "Invalid category"
    );
    assert_eq!(
        extract_message(400, Some(r#"{ "error" : "Email already used", "code": 7 }"#)),
        "Email already used"
    );
}

#[test]
fn falls_back_to_status() {
    let msg = extract_message(500, None);
    assert!(msg.contains("500"), "{}", msg);
    assert_eq!(msg, "HTTP 500: Internal Server Error");

    // blank, non-string and missing error fields
    assert_eq!(extract_message(404, Some(r#"{"error":"  "}"#)), "HTTP 404: Not Found");
    assert_eq!(extract_message(409, Some(r#"{"error":42}"#)), "HTTP 409: Conflict");
    assert_eq!(extract_message(400, Some(r#"["error"]"#)), "HTTP 400: Bad Request");
    assert_eq!(extract_message(599, Some("")), "HTTP 599: Request failed");
}

#[test]
fn truncated_body_still_yields_message() {
    let body = r#"{"error": "Amount must be positive", "details": [1, 2"#;
    assert_eq!(extract_message(422, Some(body)), "Amount must be positive");
}

#[test]
fn classifies_responses() {
    assert!(ApiError::from_response(401, Some("{}")).is_session_expired());
    match ApiError::from_response(422, Some(r#"{"error":"Invalid category"}"#)) {
        ApiError::Backend { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Invalid category");
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(
        ApiError::SessionExpired.to_string(),
        SESSION_EXPIRED_MESSAGE
    );
    assert_eq!(
        ApiError::transport("").to_string(),
        "Unexpected error occurred."
    );
}
