use crate::value::Value;
use serde_json::{Map as JSMap, Number as JSNumber, Value as JSValue};

/// Trait for converting [Value]s to [serde_json::Value]s.
pub trait ValueToJson {
    /// Convert the current value to a [serde_json::Value].
    ///
    /// Enum values become strings, and floats that JSON can't represent become `null`.
    fn to_json(&self) -> JSValue;
}

impl ValueToJson for Value {
    fn to_json(&self) -> JSValue {
        match self {
            Value::Null => JSValue::Null,
            Value::Boolean(value) => JSValue::Bool(*value),
            Value::Int(value) => JSValue::Number((*value).into()),
            Value::Float(value) => JSNumber::from_f64(*value).map_or(JSValue::Null, JSValue::Number),
            Value::String(value) | Value::Enum(value) => JSValue::String(value.clone()),
            Value::List(values) => JSValue::Array(values.iter().map(Value::to_json).collect()),
            Value::Object(fields) => {
                let mut map = JSMap::with_capacity(fields.len());
                for (name, value) in fields.iter() {
                    map.insert(name.clone(), value.to_json());
                }
                JSValue::Object(map)
            }
        }
    }
}

impl From<JSValue> for Value {
    /// Converts a JSON value without any type information, so strings never become enum values.
    fn from(value: JSValue) -> Self {
        match value {
            JSValue::Null => Value::Null,
            JSValue::Bool(value) => Value::Boolean(value),
            JSValue::Number(number) => match number.as_i64() {
                Some(int) => Value::Int(int),
                None => number.as_f64().map_or(Value::Null, Value::Float),
            },
            JSValue::String(value) => Value::String(value),
            JSValue::Array(values) => Value::List(values.into_iter().map(Value::from).collect()),
            JSValue::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, Value::from(value)))
                    .collect(),
            ),
        }
    }
}
