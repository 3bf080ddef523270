//! The uniform tool result envelope.
//!
//! Every tool operation returns exactly this shape, JSON-serialized, so an
//! agent caller only ever inspects `success` and `data` and never needs
//! exception handling. All three fields are always present on the wire;
//! `data` is `null` on failure.

use serde::{Deserialize, Serialize};

/// Default message for the bare success constructor.
const DEFAULT_OK_MESSAGE: &str = "operation succeeded";

/// Emitted when the envelope itself cannot be serialized. Keeps the contract
/// intact even when `data` holds something the serializer rejects.
const SERIALIZE_ERROR_JSON: &str =
    "{\"success\":false,\"message\":\"JSON serialize error\",\"data\":null}";

/// Result envelope for every tool operation.
///
/// Two construction paths only: [`ToolResult::ok`] / [`ToolResult::ok_with`]
/// for success, [`ToolResult::fail`] for failure. Failure envelopes never
/// carry data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// Payload on success, `null` on failure.
    pub data: Option<serde_json::Value>,
}

impl ToolResult {
    /// Success with the default message.
    #[must_use]
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            success: true,
            message: DEFAULT_OK_MESSAGE.to_string(),
            data: Some(data),
        }
    }

    /// Success with an explicit message.
    #[must_use]
    pub fn ok_with(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Failure with a descriptive message; `data` is always absent.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Serialize to pretty-printed JSON. Never fails: on a serializer error
    /// the caller still receives a well-formed failure envelope.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| SERIALIZE_ERROR_JSON.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ok_uses_default_message() {
        let result = ToolResult::ok(json!([1, 2, 3]));
        assert!(result.success);
        assert_eq!(result.message, "operation succeeded");
        assert_eq!(result.data, Some(json!([1, 2, 3])));
    }

    #[test]
    fn ok_with_keeps_explicit_message() {
        let result = ToolResult::ok_with("cart is empty", json!([]));
        assert!(result.success);
        assert_eq!(result.message, "cart is empty");
        assert_eq!(result.data, Some(json!([])));
    }

    #[test]
    fn fail_never_carries_data() {
        let result = ToolResult::fail("order not found: ORD-1");
        assert!(!result.success);
        assert_eq!(result.message, "order not found: ORD-1");
        assert!(result.data.is_none());
    }

    #[test]
    fn all_three_fields_always_serialized() {
        let value: serde_json::Value =
            serde_json::from_str(&ToolResult::fail("boom").to_json()).expect("valid json");
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), 3);
        assert_eq!(object["success"], json!(false));
        assert_eq!(object["data"], serde_json::Value::Null);
    }

    #[test]
    fn round_trips_through_json() {
        let result = ToolResult::ok_with("order query succeeded", json!({"orderNo": "ORD-1"}));
        let parsed: ToolResult = serde_json::from_str(&result.to_json()).expect("valid json");
        assert_eq!(parsed, result);
    }
}
