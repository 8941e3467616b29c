// Unit tests for RedactedApiKey
// The key value must never leak through Debug, Display, or serde.

use crate::RedactedApiKey;

const TEST_KEY: &str = "AIzaSyTestKeyValue1234567890";

/// **VALUE**: Verifies Debug and Display never contain the key value.
///
/// **WHY THIS MATTERS**: Request descriptors and errors get logged. A key
/// that leaks into a log file is a credential leak.
///
/// **BUG THIS CATCHES**: Would catch someone replacing the manual Debug
/// impl with `#[derive(Debug)]`.
#[test]
fn given_key_when_formatted_then_value_is_redacted() {
    let key = RedactedApiKey::new(String::from(TEST_KEY));

    let debug = format!("{:?}", key);
    let display = format!("{}", key);

    assert!(!debug.contains(TEST_KEY), "Debug output leaked the key");
    assert!(!display.contains(TEST_KEY), "Display output leaked the key");
    assert!(debug.contains("REDACTED"));
}

/// **VALUE**: Verifies serialization is refused outright.
///
/// **WHY THIS MATTERS**: The config file is serialized with serde. If the
/// key were serializable it would eventually end up on disk in plain text.
///
/// **BUG THIS CATCHES**: Would catch a `#[derive(Serialize)]` slipping in.
#[test]
fn given_key_when_serialized_then_errors() {
    let key = RedactedApiKey::new(String::from(TEST_KEY));

    let result = serde_json::to_string(&key);

    assert!(result.is_err(), "RedactedApiKey must refuse serialization");
}

/// **VALUE**: Verifies as_str still hands out the raw value.
///
/// **WHY THIS MATTERS**: Request construction needs the real key for the
/// `key` query parameter; redaction must not break transmission.
///
/// **BUG THIS CATCHES**: Would catch redaction applied to as_str itself.
#[test]
fn given_key_when_accessed_for_transmission_then_returns_value() {
    let key = RedactedApiKey::new(String::from(TEST_KEY));

    assert_eq!(key.as_str(), TEST_KEY);
    assert_eq!(key.len(), TEST_KEY.len());
    assert!(!key.is_empty());
}
