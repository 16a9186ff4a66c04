//! Failure payload classification and error normalization

use crate::form::{ErrorMap, FieldMessages, GENERIC_ERROR_KEY};
use serde_json::Value;

/// The shapes a failure response payload can take.
///
/// The variants are mutually exclusive and checked in this priority order;
/// the first match wins.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorPayload {
    /// Object with an `errors` attribute holding the field map.
    Fields(ErrorMap),
    /// Object with a top-level `message` but no `errors`.
    Message(String),
    /// Any other object: every top-level attribute is a field entry.
    Bag(ErrorMap),
    /// Missing or non-object payload.
    Unusable,
}

impl ErrorPayload {
    /// Classify the payload a failed submission carried
    pub fn classify(payload: Option<&Value>) -> Self {
        let Some(Value::Object(object)) = payload else {
            return ErrorPayload::Unusable;
        };
        if let Some(errors) = object.get("errors") {
            // a non-object `errors` attribute degrades to the generic entry
            let Value::Object(map) = errors else {
                return ErrorPayload::Unusable;
            };
            return ErrorPayload::Fields(
                map.iter()
                    .map(|(field, messages)| {
                        (field.clone(), FieldMessages::from_value(messages))
                    })
                    .collect(),
            );
        }
        if let Some(message) = object.get("message") {
            return ErrorPayload::Message(render(message));
        }
        ErrorPayload::Bag(
            object
                .iter()
                .map(|(field, messages)| (field.clone(), FieldMessages::from_value(messages)))
                .collect(),
        )
    }

    /// Convert into the error map to install, falling back to
    /// `default_message` for unusable payloads.
    pub fn into_error_map(self, default_message: &str) -> ErrorMap {
        match self {
            ErrorPayload::Fields(map) | ErrorPayload::Bag(map) => map,
            ErrorPayload::Message(message) => generic_entry(message),
            ErrorPayload::Unusable => generic_entry(default_message.to_string()),
        }
    }
}

fn generic_entry(message: String) -> ErrorMap {
    let mut map = ErrorMap::new();
    map.insert(GENERIC_ERROR_KEY.to_string(), FieldMessages::One(message));
    map
}

fn render(message: &Value) -> String {
    match message {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
