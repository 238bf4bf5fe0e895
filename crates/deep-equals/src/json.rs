//! Bridge between [`Value`] and [`serde_json::Value`].

use serde_json::{Map as JsonMap, Number};

use crate::error::{DeepEqualsError, Result};
use crate::value::Value;

/// Largest magnitude below which every integer is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

fn number_to_json(n: f64) -> Result<serde_json::Value> {
    if !n.is_finite() {
        return Err(DeepEqualsError::NotJson {
            kind: "non-finite number",
        });
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Ok(serde_json::Value::from(n as i64));
    }
    Number::from_f64(n)
        .map(serde_json::Value::Number)
        .ok_or(DeepEqualsError::NotJson { kind: "number" })
}

impl TryFrom<Value> for serde_json::Value {
    type Error = DeepEqualsError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(b)),
            Value::Number(n) => number_to_json(n),
            Value::String(s) => Ok(serde_json::Value::String(s)),
            Value::Array(items) => items
                .into_iter()
                .map(serde_json::Value::try_from)
                .collect::<Result<Vec<_>>>()
                .map(serde_json::Value::Array),
            Value::Object(map) => {
                let mut out = JsonMap::with_capacity(map.len());
                for (key, val) in map {
                    out.insert(key, serde_json::Value::try_from(val)?);
                }
                Ok(serde_json::Value::Object(out))
            }
            other => Err(DeepEqualsError::NotJson { kind: other.kind() }),
        }
    }
}
