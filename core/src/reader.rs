//! Typed, failure-explicit access to one JSON object's fields.
//!
//! # Design
//! The service mixes string- and number-typed fields freely (`"Count":"5"`
//! one day, `"Count":5` the next), so every accessor applies a fixed
//! coercion allow-list per target type and rejects everything outside it.
//! Strict accessors treat an absent field and an explicit JSON null the
//! same way (the service omits most optional fields rather than nulling
//! them); the `null_or_*` family collapses both to `None`. The reader
//! borrows the underlying object, performs no writes, and is cheap to
//! create per object or nested sub-object.

use serde_json::{Map, Value};

use crate::error::ApiError;

/// Read-only view over one JSON object with typed field extraction.
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wrap a JSON value that must be object-shaped. Anything else is a
    /// contract violation by whoever handed the value over.
    pub fn from_value(value: &'a Value) -> Result<Self, ApiError> {
        value
            .as_object()
            .map(Self::new)
            .ok_or_else(|| mismatch("(root)", "object", value))
    }

    /// Field lookup that folds explicit JSON null into "absent".
    fn get(&self, name: &str) -> Option<&'a Value> {
        match self.fields.get(name) {
            None | Some(Value::Null) => None,
            present => present,
        }
    }

    fn require(&self, name: &str) -> Result<&'a Value, ApiError> {
        self.get(name)
            .ok_or_else(|| ApiError::MissingField(name.to_string()))
    }

    pub fn string(&self, name: &str) -> Result<String, ApiError> {
        let value = self.require(name)?;
        coerce_string(value).ok_or_else(|| mismatch(name, "string", value))
    }

    pub fn null_or_string(&self, name: &str) -> Result<Option<String>, ApiError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => coerce_string(value)
                .map(Some)
                .ok_or_else(|| mismatch(name, "string", value)),
        }
    }

    pub fn int(&self, name: &str) -> Result<i64, ApiError> {
        let value = self.require(name)?;
        coerce_int(value).ok_or_else(|| mismatch(name, "integer", value))
    }

    pub fn null_or_int(&self, name: &str) -> Result<Option<i64>, ApiError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => coerce_int(value)
                .map(Some)
                .ok_or_else(|| mismatch(name, "integer", value)),
        }
    }

    pub fn float(&self, name: &str) -> Result<f64, ApiError> {
        let value = self.require(name)?;
        coerce_float(value).ok_or_else(|| mismatch(name, "float", value))
    }

    pub fn null_or_float(&self, name: &str) -> Result<Option<f64>, ApiError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => coerce_float(value)
                .map(Some)
                .ok_or_else(|| mismatch(name, "float", value)),
        }
    }

    pub fn bool(&self, name: &str) -> Result<bool, ApiError> {
        let value = self.require(name)?;
        coerce_bool(value).ok_or_else(|| mismatch(name, "boolean", value))
    }

    pub fn null_or_bool(&self, name: &str) -> Result<Option<bool>, ApiError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => coerce_bool(value)
                .map(Some)
                .ok_or_else(|| mismatch(name, "boolean", value)),
        }
    }

    /// The field as an ordered list of untyped elements. An object-shaped
    /// value here is a type error, not an empty list.
    pub fn array_list(&self, name: &str) -> Result<&'a [Value], ApiError> {
        let value = self.require(name)?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| mismatch(name, "list", value))
    }

    /// The field as a nested object, wrapped in a fresh reader.
    pub fn array_object(&self, name: &str) -> Result<FieldReader<'a>, ApiError> {
        let value = self.require(name)?;
        value
            .as_object()
            .map(FieldReader::new)
            .ok_or_else(|| mismatch(name, "object", value))
    }
}

fn mismatch(field: &str, expected: &'static str, found: &Value) -> ApiError {
    ApiError::TypeMismatch {
        field: field.to_string(),
        expected,
        found: type_name(found).to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.as_str() {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
