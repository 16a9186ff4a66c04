//! Form field data, original snapshot, and submission lifecycle flags

use super::errors::{ErrorMap, FormErrors};
use super::fields::{strip_reserved, FieldMap};
use serde_json::Value;

/// A set of editable fields bound to a remote submission endpoint.
///
/// Owns the current field values, an immutable snapshot of the original
/// values for [`reset`](Form::reset), the busy/successful lifecycle flags,
/// and the per-field validation errors from the last failed submission.
/// The key set is fixed at construction: [`set`](Form::set) and
/// [`fill`](Form::fill) update known fields but never add new ones.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: FieldMap,
    original: FieldMap,
    busy: bool,
    successful: bool,
    errors: FormErrors,
}

impl Form {
    /// Create a form from its initial field values.
    ///
    /// Reserved bookkeeping names are stripped from `initial`; the
    /// remaining entries are deep-copied into the snapshot that
    /// [`reset`](Form::reset) restores from.
    pub fn new(initial: FieldMap) -> Self {
        let fields = strip_reserved(initial);
        Self {
            original: fields.clone(),
            fields,
            busy: false,
            successful: false,
            errors: FormErrors::new(),
        }
    }

    /// Data keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Fresh copy of the current field values, independent of internal
    /// storage
    pub fn data(&self) -> FieldMap {
        self.fields.clone()
    }

    /// Current value of a field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Update an existing field's value.
    ///
    /// Unknown names are ignored; returns whether the field was known.
    pub fn set(&mut self, field: &str, value: Value) -> bool {
        match self.fields.get_mut(field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Replace every field's value from `values`.
    ///
    /// A field absent from `values` becomes null; keys in `values` the form
    /// does not have are ignored.
    pub fn fill(&mut self, values: &FieldMap) {
        for (name, slot) in &mut self.fields {
            *slot = values.get(name).cloned().unwrap_or(Value::Null);
        }
    }

    /// Restore every field from the original snapshot
    pub fn reset(&mut self) {
        for (name, slot) in &mut self.fields {
            *slot = self.original.get(name).cloned().unwrap_or(Value::Null);
        }
    }

    /// Whether a submission is currently in flight
    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Whether the most recent submission settled without failure
    pub fn successful(&self) -> bool {
        self.successful
    }

    /// Validation errors from the last failed submission
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Mutable access to the error store
    pub fn errors_mut(&mut self) -> &mut FormErrors {
        &mut self.errors
    }

    /// Clear one field's error entry.
    ///
    /// Intended for UI layers reacting to a user edit of that field.
    pub fn clear_error(&mut self, field: &str) {
        self.errors.clear_field(field);
    }

    /// Enter the processing state: all errors cleared, busy raised,
    /// successful lowered.
    pub fn start_processing(&mut self) {
        self.errors.clear();
        self.busy = true;
        self.successful = false;
    }

    /// Leave the processing state after a clean settle
    pub fn finish_processing(&mut self) {
        self.busy = false;
        self.successful = true;
    }

    /// Leave the processing state after a failure, installing the
    /// normalized error map when the failure carried one.
    pub fn fail_processing(&mut self, errors: Option<ErrorMap>) {
        self.busy = false;
        if let Some(map) = errors {
            self.errors.set(map);
        }
    }
}
