//! Field map type and reserved bookkeeping names

use indexmap::IndexMap;
use serde_json::Value;

/// Named field values a form manages, in insertion order.
pub type FieldMap = IndexMap<String, Value>;

/// Attribute names reserved for form bookkeeping.
///
/// Entries with these names are stripped from the initial field map so user
/// data can never shadow lifecycle state.
pub const RESERVED_FIELD_NAMES: &[&str] =
    &["busy", "successful", "errors", "originalData", "transport"];

/// Check whether a field name belongs to the reserved bookkeeping set
pub fn is_reserved(name: &str) -> bool {
    RESERVED_FIELD_NAMES.contains(&name)
}

/// Drop reserved bookkeeping names from an initial field map
pub(crate) fn strip_reserved(mut fields: FieldMap) -> FieldMap {
    for name in RESERVED_FIELD_NAMES {
        if fields.shift_remove(*name).is_some() {
            tracing::debug!("dropping reserved field name {name:?} from initial form data");
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_reserved() {
        assert!(is_reserved("busy"));
        assert!(is_reserved("successful"));
        assert!(is_reserved("errors"));
        assert!(is_reserved("originalData"));
        assert!(is_reserved("transport"));
        assert!(!is_reserved("name"));
        assert!(!is_reserved("original_data"));
    }

    #[test]
    fn test_strip_reserved_removes_bookkeeping_names() {
        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), json!("Ada"));
        fields.insert("busy".to_string(), json!(true));
        fields.insert("errors".to_string(), json!({"name": "taken"}));

        let stripped = strip_reserved(fields);
        assert_eq!(stripped.len(), 1);
        assert_eq!(stripped.get("name"), Some(&json!("Ada")));
    }

    #[test]
    fn test_strip_reserved_keeps_insertion_order() {
        let mut fields = FieldMap::new();
        fields.insert("first".to_string(), json!(1));
        fields.insert("transport".to_string(), json!("x"));
        fields.insert("second".to_string(), json!(2));

        let stripped = strip_reserved(fields);
        let keys: Vec<&String> = stripped.keys().collect();
        assert_eq!(keys, ["first", "second"]);
    }
}
