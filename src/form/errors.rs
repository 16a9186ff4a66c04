//! Validation error store keyed by field name

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key used for errors that are not tied to a specific field.
pub const GENERIC_ERROR_KEY: &str = "error";

/// Messages attached to a single field.
///
/// Servers report either one message or a list of them; both shapes are
/// kept as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldMessages {
    One(String),
    Many(Vec<String>),
}

impl FieldMessages {
    /// First/primary message, if any
    pub fn first(&self) -> Option<&str> {
        match self {
            FieldMessages::One(message) => Some(message),
            FieldMessages::Many(messages) => messages.first().map(String::as_str),
        }
    }

    /// Build from an arbitrary JSON value, rendering non-string entries
    pub(crate) fn from_value(value: &Value) -> Self {
        match value {
            Value::String(message) => FieldMessages::One(message.clone()),
            Value::Array(items) => FieldMessages::Many(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(message) => message.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            other => FieldMessages::One(other.to_string()),
        }
    }
}

impl From<&str> for FieldMessages {
    fn from(message: &str) -> Self {
        FieldMessages::One(message.to_string())
    }
}

impl From<String> for FieldMessages {
    fn from(message: String) -> Self {
        FieldMessages::One(message)
    }
}

/// Field name to messages, in installation order.
pub type ErrorMap = IndexMap<String, FieldMessages>;

/// Holds validation errors reported for form fields.
///
/// Errors are data, never `Err`: a failed submission installs them here and
/// the caller queries or clears them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormErrors {
    map: ErrorMap,
}

impl FormErrors {
    /// Create an empty error store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the field currently has at least one error
    pub fn has(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    /// First/primary message for the field, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.map.get(field).and_then(FieldMessages::first)
    }

    /// Whether any field has an error
    pub fn any(&self) -> bool {
        !self.map.is_empty()
    }

    /// Replace the entire map with the given one (no merge)
    pub fn set(&mut self, map: ErrorMap) {
        self.map = map;
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Remove only the given field's entry
    pub fn clear_field(&mut self, field: &str) {
        self.map.shift_remove(field);
    }

    /// All entries, for iteration by rendering layers
    pub fn all(&self) -> &ErrorMap {
        &self.map
    }
}
