//! Argument validation driven by the advertised tool schemas.
//!
//! Every tool declares its arguments once, as a `Deserialize + JsonSchema`
//! struct. [`input_schema`] turns that struct into the `inputSchema` clients
//! discover, and [`parse_arguments`] checks a call's arguments against the
//! same schema before deserializing them. Every failure is a
//! [`ValidationError`] naming the dotted path of the offending field (e.g.
//! `profile.email`), raised before any external call is made.
//!
//! An explicit `null` for an optional field is treated the same as leaving it
//! out. Unknown fields are ignored. Whole-valued floats such as `20.0` are
//! accepted where an integer is expected.

use crate::error::{ValidationError, ValidationResult};
use regex::Regex;
use rmcp::model::JsonObject;
use schemars::JsonSchema;
use schemars::generate::SchemaSettings;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::{Arc, LazyLock};

/// `local@domain.tld`: the local part holds letters, digits and `_ ' + - .`,
/// with no leading, trailing or doubled dot, and does not end in `'`. The
/// domain is two or more labels of letters, digits and `-` (not leading),
/// ending in an alphabetic label of at least two characters.
static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9_'+\-]+\.)*[A-Za-z0-9_'+\-]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .ok()
});

/// Email syntax check applied to fields declared with `format: email`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.as_ref().is_some_and(|pattern| pattern.is_match(value))
}

/// JSON Schema of `T` with nested types inlined, as advertised in `tools/list`.
pub fn input_schema<T: JsonSchema>() -> Arc<JsonObject> {
    Arc::new(schema_object::<T>())
}

fn schema_object<T: JsonSchema>() -> JsonObject {
    let schema = SchemaSettings::draft2020_12()
        .with(|settings| settings.inline_subschemas = true)
        .into_generator()
        .into_root_schema_for::<T>();

    match serde_json::to_value(schema) {
        Ok(Value::Object(mut schema)) => {
            schema.shift_remove("$schema");
            schema
        }
        _ => JsonObject::new(),
    }
}

/// Validate `arguments` against the schema of `T`, then deserialize them.
///
/// Missing (`null`) arguments read as an empty object.
pub fn parse_arguments<T>(arguments: Value) -> ValidationResult<T>
where
    T: DeserializeOwned + JsonSchema,
{
    let mut fields = match arguments {
        Value::Object(fields) => fields,
        Value::Null => Map::new(),
        _ => return Err(ValidationError::invalid_type("arguments", "object")),
    };

    check_object(&schema_object::<T>(), &mut fields, "")?;

    serde_json::from_value(Value::Object(fields))
        .map_err(|err| ValidationError::invalid_format("arguments", err.to_string()))
}

fn field_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn check_object(
    schema: &JsonObject,
    fields: &mut Map<String, Value>,
    prefix: &str,
) -> ValidationResult<()> {
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Ok(());
    };
    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    for (name, property) in properties {
        let path = field_path(prefix, name);
        match fields.get_mut(name) {
            Some(value) if !value.is_null() => check_value(property, value, &path)?,
            _ if required.contains(&name.as_str()) => return Err(ValidationError::missing(path)),
            _ => {}
        }
    }
    Ok(())
}

fn check_value(property: &Value, value: &mut Value, path: &str) -> ValidationResult<()> {
    let schema = non_null_branch(property);
    let keyword = |name: &str| schema.get(name).or_else(|| property.get(name));

    match declared_type(schema) {
        Some("string") => {
            let Value::String(text) = value else {
                return Err(ValidationError::invalid_type(path, "string"));
            };
            if keyword("format").and_then(Value::as_str) == Some("email") && !is_valid_email(text)
            {
                return Err(ValidationError::invalid_format(path, "Invalid email"));
            }
        }
        Some("integer") => {
            *value = whole_number(value)
                .ok_or_else(|| ValidationError::invalid_type(path, "integer"))?;
            let minimum = keyword("minimum").and_then(Value::as_f64);
            if let Some(minimum) = minimum.filter(|min| value.as_f64().is_some_and(|n| n < *min)) {
                let reason = if minimum == 0.0 {
                    "must not be negative".to_string()
                } else {
                    format!("must be at least {}", minimum)
                };
                return Err(ValidationError::invalid_format(path, reason));
            }
        }
        Some("object") => {
            let Value::Object(fields) = value else {
                return Err(ValidationError::invalid_type(path, "object"));
            };
            if let Some(schema) = schema.as_object() {
                check_object(schema, fields, path)?;
            }
        }
        _ => {}
    }
    Ok(())
}

// `Option<T>` is either `type: [T, "null"]` or `anyOf: [T, {type: null}]`.
fn non_null_branch(schema: &Value) -> &Value {
    schema
        .get("anyOf")
        .and_then(Value::as_array)
        .and_then(|branches| {
            branches
                .iter()
                .find(|branch| branch.get("type").and_then(Value::as_str) != Some("null"))
        })
        .unwrap_or(schema)
}

fn declared_type(schema: &Value) -> Option<&str> {
    match schema.get("type")? {
        Value::String(name) => Some(name.as_str()),
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .find(|name| *name != "null"),
        _ => None,
    }
}

fn whole_number(value: &Value) -> Option<Value> {
    let Value::Number(number) = value else {
        return None;
    };
    if number.is_i64() || number.is_u64() {
        return Some(value.clone());
    }

    let float = number.as_f64().filter(|f| f.is_finite() && f.fract() == 0.0)?;
    if float < 0.0 {
        Some(Value::from(float as i64))
    } else {
        Some(Value::from(float as u64))
    }
}
