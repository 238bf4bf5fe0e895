//! The value domain compared by [`crate::deep_equal`].

use indexmap::IndexMap;
use num_bigint::BigInt;

use crate::symbol::Symbol;

/// Key/value storage of [`Value::Object`]. Insertion order is kept for
/// display but never affects equality.
pub type Map = IndexMap<String, Value>;

/// A dynamically shaped value.
#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    BigInt(BigInt),
    Symbol(Symbol),
    Array(Vec<Value>),
    Object(Map),
    /// Object subtypes with no structural comparison rule.
    Opaque(Opaque),
}

/// Composite values that exist in the source runtime but are never
/// structurally compared.
#[derive(Debug, Clone)]
pub enum Opaque {
    Date { epoch_ms: f64 },
    Pattern { source: String, flags: String },
}

/// The comparison class of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Primitive,
    Sequence,
    Mapping,
    Unsupported,
}

impl Value {
    pub fn shape(&self) -> Shape {
        match self {
            Value::Undefined
            | Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::BigInt(_)
            | Value::Symbol(_) => Shape::Primitive,
            Value::Array(_) => Shape::Sequence,
            Value::Object(_) => Shape::Mapping,
            Value::Opaque(_) => Shape::Unsupported,
        }
    }

    /// Short type name, mostly for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::BigInt(_) => "bigint",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Opaque(Opaque::Date { .. }) => "date",
            Value::Opaque(Opaque::Pattern { .. }) => "pattern",
        }
    }

    pub fn nan() -> Self {
        Value::Number(f64::NAN)
    }

    /// Builds an object from key/value pairs. Later duplicates overwrite
    /// earlier ones in place.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn date(epoch_ms: f64) -> Self {
        Value::Opaque(Opaque::Date { epoch_ms })
    }

    pub fn pattern(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Value::Opaque(Opaque::Pattern {
            source: source.into(),
            flags: flags.into(),
        })
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::deep_equal(self, other)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Value::BigInt(v)
    }
}

impl From<Symbol> for Value {
    fn from(v: Symbol) -> Self {
        Value::Symbol(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Object(v)
    }
}
