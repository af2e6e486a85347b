//! Outbound notification payload.

use serde::Serialize;
use serde_json::{Map, Value};

/// Reserved payload key carrying the event kind tag.
pub const KIND_KEY: &str = "type";

/// A backend-ready notification payload: a flat string-keyed JSON map
/// holding one projected variant plus the kind tag under [`KIND_KEY`].
///
/// Immutable once constructed; it exists only to be handed to the delivery
/// client for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutboundPayload(Map<String, Value>);

impl OutboundPayload {
    /// Builds a payload from a kind tag and the projected variant value,
    /// stored under `field`.
    #[must_use]
    pub fn new(kind: &str, field: &'static str, variant: Value) -> Self {
        let mut map = Map::new();
        map.insert(field.to_owned(), variant);
        map.insert(KIND_KEY.to_owned(), Value::String(kind.to_owned()));
        Self(map)
    }

    /// Returns the kind tag stored under [`KIND_KEY`].
    #[must_use]
    pub fn kind(&self) -> &str {
        // The constructor always inserts KIND_KEY as a string.
        self.0
            .get(KIND_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Looks up a projected value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the payload keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Consumes the payload into a plain JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_carries_variant_and_kind_key() {
        let payload = OutboundPayload::new("newMessage", "newMessage", json!({"id": "m1"}));

        assert_eq!(payload.kind(), "newMessage");
        assert_eq!(payload.get("newMessage"), Some(&json!({"id": "m1"})));
        assert_eq!(payload.keys().count(), 2);
    }

    #[test]
    fn test_payload_serializes_as_flat_object() {
        let payload = OutboundPayload::new("newMeetupRequest", "requestId", json!("r1"));

        assert_eq!(
            payload.into_value(),
            json!({"requestId": "r1", "type": "newMeetupRequest"})
        );
    }
}
