//! Field extraction and validation for algorithm definitions
//!
//! Definitions arrive as untyped JSON mappings. Every helper here classifies
//! a failure as exactly one of the two construction error kinds: the field
//! was absent, or the supplied value cannot be converted to the declared
//! type.

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while constructing an [`Algorithm`](super::Algorithm) from
/// an untyped mapping. Construction is all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

impl ValidationError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn type_mismatch(field: &'static str, expected: &'static str, actual: &Value) -> Self {
        Self::TypeMismatch {
            field,
            expected,
            actual: json_type_name(actual),
        }
    }
}

/// Human-readable name of a JSON value's type, for error reporting.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// An explicit `null` counts as absent: required fields report MissingField,
// optional fields read back as None.
fn present<'a>(fields: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    fields.get(field).filter(|v| !v.is_null())
}

/// Extract a required string field.
pub fn require_string(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match present(fields, field) {
        None => Err(ValidationError::missing_field(field)),
        Some(value) => coerce_string(field, value),
    }
}

/// Extract an optional string field; absent or null yields `None`.
pub fn optional_string(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    present(fields, field)
        .map(|value| coerce_string(field, value))
        .transpose()
}

/// Extract a required list-of-strings field.
pub fn require_string_list(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<String>, ValidationError> {
    match present(fields, field) {
        None => Err(ValidationError::missing_field(field)),
        Some(value) => coerce_string_list(field, value),
    }
}

/// Extract an optional list-of-strings field; absent or null yields `None`.
pub fn optional_string_list(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<Vec<String>>, ValidationError> {
    present(fields, field)
        .map(|value| coerce_string_list(field, value))
        .transpose()
}

/// Extract a required non-negative integer field.
pub fn require_u32(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<u32, ValidationError> {
    match present(fields, field) {
        None => Err(ValidationError::missing_field(field)),
        Some(value) => value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| ValidationError::type_mismatch(field, "integer", value)),
    }
}

/// Extract a required list-of-objects field. Each element comes back as its
/// raw JSON mapping; the per-entry schema is unconstrained.
pub fn require_object_list(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<Map<String, Value>>, ValidationError> {
    match present(fields, field) {
        None => Err(ValidationError::missing_field(field)),
        Some(value) => {
            let items = value
                .as_array()
                .ok_or_else(|| ValidationError::type_mismatch(field, "list of objects", value))?;

            items
                .iter()
                .map(|item| {
                    item.as_object().cloned().ok_or_else(|| {
                        ValidationError::type_mismatch(field, "list of objects", item)
                    })
                })
                .collect()
        }
    }
}

fn coerce_string(field: &'static str, value: &Value) -> Result<String, ValidationError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| ValidationError::type_mismatch(field, "string", value))
}

fn coerce_string_list(field: &'static str, value: &Value) -> Result<Vec<String>, ValidationError> {
    let items = value
        .as_array()
        .ok_or_else(|| ValidationError::type_mismatch(field, "list of strings", value))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_owned)
                .ok_or_else(|| ValidationError::type_mismatch(field, "list of strings", item))
        })
        .collect()
}
