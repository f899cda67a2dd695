use super::*;
use std::error::Error as StdError;

#[test]
fn test_status_error() {
    let error = Error::Status {
        context: "list webhooks".to_string(),
        status: StatusCode::UNAUTHORIZED,
    };

    assert_eq!(
        error.to_string(),
        "Failed to list webhooks: request failed with status: 401 Unauthorized"
    );
    assert_eq!(error.status(), Some(StatusCode::UNAUTHORIZED));
    assert!(error.source().is_none());
}

#[test]
fn test_status_error_carries_update_context() {
    let error = Error::Status {
        context: "update webhook wh_1 with new url https://new.example/hook".to_string(),
        status: StatusCode::BAD_REQUEST,
    };

    let message = error.to_string();
    assert!(message.contains("wh_1"));
    assert!(message.contains("https://new.example/hook"));
    assert!(message.contains("400 Bad Request"));
}

#[test]
fn test_decode_error() {
    let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error = Error::Decode(json_error);

    assert!(error
        .to_string()
        .starts_with("Failed to decode response: "));
    assert!(error.status().is_none());
    assert!(error.source().is_some());
}

#[test]
fn test_serialization_error() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = Error::Serialization(json_error);

    assert!(error
        .to_string()
        .starts_with("Failed to marshal request body: "));
    assert!(error.status().is_none());
}

#[test]
fn test_error_is_send_sync() {
    // This test verifies that Error implements Send and Sync traits
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
