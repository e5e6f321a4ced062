//! JSON serialization helpers for console output.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Object keys whose values are never printed.
pub const REDACTED_KEYS: [&str; 2] = ["password", "token"];

/// Replacement for redacted values.
pub const REDACTED_VALUE: &str = "************";

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to pretty JSON with credentials masked.
///
/// Output format:
/// - 2-space indentation
/// - No trailing newline
/// - `password` and `token` values replaced at any depth
/// - Null object fields removed
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_redacted<T: Serialize + ?Sized>(value: &T) -> Result<String, SerializationError> {
    let mut value = serde_json::to_value(value)?;
    redact(&mut value);
    to_json_pretty(&value)
}

/// Serializes a value to pretty JSON with 2-space indentation.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(buffer)?)
}

/// Masks credentials and drops null fields in place.
pub fn redact(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for (key, v) in map.iter_mut() {
                if REDACTED_KEYS.contains(&key.as_str()) {
                    *v = Value::String(REDACTED_VALUE.to_string());
                } else {
                    redact(v);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact),
        _ => {}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use camunda_deploy_domain::{AuthConfig, EndpointConfig};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_redacts_nested_credentials() {
        let auth = AuthConfig::basic("demo", "secret");
        let endpoint = EndpointConfig::new("http://localhost/engine-rest", auth).unwrap();

        let json = to_json_redacted(&endpoint).unwrap();

        assert!(!json.contains("secret"));
        assert!(json.contains(r#""password": "************""#));
        assert!(json.contains(r#""username": "demo""#));
    }

    #[test]
    fn test_redacts_bearer_token() {
        let json = to_json_redacted(&AuthConfig::bearer("abc")).unwrap();
        assert_eq!(
            json,
            "{\n  \"type\": \"bearer\",\n  \"token\": \"************\"\n}"
        );
    }

    #[test]
    fn test_drops_null_fields_only_in_objects() {
        let mut value = json!({ "a": null, "b": [null, 1], "c": { "d": null } });
        redact(&mut value);
        assert_eq!(value, json!({ "b": [null, 1], "c": {} }));
    }

    #[test]
    fn test_pretty_uses_two_spaces() {
        let json = to_json_pretty(&json!({ "name": "invoice" })).unwrap();
        assert_eq!(json, "{\n  \"name\": \"invoice\"\n}");
    }
}
