//! Primitive-field projection of identity-provider records.
//!
//! Okta entities carry deeply nested `_links`, `_embedded`, `credentials` and
//! `profile` structures. Before a list of records is serialized back to the
//! caller it is reduced to the fields that are plain values, so the response
//! stays flat and compact.
//!
//! The rules depend on where a value sits:
//!
//! | Kind          | At the top level / inside a sequence | As a mapping value                       |
//! |---------------|--------------------------------------|------------------------------------------|
//! | null          | kept                                 | kept                                     |
//! | primitive     | kept                                 | kept                                     |
//! | sequence      | filtered element-wise                | kept verbatim if all elements primitive, |
//! |               |                                      | otherwise dropped                        |
//! | mapping       | projected, absent if nothing remains | dropped                                  |
//!
//! A mapping with no surviving keys projects to *absent* (`None`) rather than
//! an empty object, so callers can tell "nothing safe to show" apart from
//! "empty object".

use serde_json::{Map, Value};

/// Shape of a JSON value as far as the projection rules are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Primitive,
    Sequence,
    Keyed,
}

impl ValueKind {
    /// Classify a value by its shape
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Self::Primitive,
            Value::Array(_) => Self::Sequence,
            Value::Object(_) => Self::Keyed,
        }
    }

    /// Null or primitive: values that are always safe to emit as-is
    pub fn is_scalar(self) -> bool {
        matches!(self, Self::Null | Self::Primitive)
    }
}

/// Project a value down to its primitive fields.
///
/// Returns `None` when the value is a mapping with nothing left to show.
/// Total and idempotent: `sanitize` never fails, and sanitizing an already
/// sanitized value returns it unchanged.
pub fn sanitize(value: &Value) -> Option<Value> {
    match value {
        Value::Array(items) => Some(Value::Array(sanitize_sequence(items))),
        Value::Object(fields) => sanitize_mapping(fields).map(Value::Object),
        scalar => Some(scalar.clone()),
    }
}

/// Consume a value and project it, avoiding a clone for scalars.
pub fn sanitize_owned(value: Value) -> Option<Value> {
    match value {
        Value::Array(_) | Value::Object(_) => sanitize(&value),
        scalar => Some(scalar),
    }
}

fn sanitize_sequence(items: &[Value]) -> Vec<Value> {
    items
        .iter()
        .filter_map(|item| {
            if ValueKind::of(item).is_scalar() {
                Some(item.clone())
            } else {
                sanitize(item)
            }
        })
        .collect()
}

fn sanitize_mapping(fields: &Map<String, Value>) -> Option<Map<String, Value>> {
    let mut projected = Map::new();
    for (key, value) in fields {
        let keep = match ValueKind::of(value) {
            ValueKind::Null | ValueKind::Primitive => true,
            ValueKind::Sequence => is_primitive_sequence(value),
            ValueKind::Keyed => false,
        };
        if keep {
            projected.insert(key.clone(), value.clone());
        }
    }

    if projected.is_empty() {
        None
    } else {
        Some(projected)
    }
}

// One level only: the elements themselves are not recursed into.
fn is_primitive_sequence(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(|item| ValueKind::of(item).is_scalar()))
}
