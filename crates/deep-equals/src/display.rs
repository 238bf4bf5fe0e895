//! String conversion in the source runtime's manner.
//!
//! This text is what the default sort collates on, so `SortedValues`
//! mapping comparison depends on it matching for primitives, arrays and
//! objects. Opaque values use a short diagnostic form instead, since they
//! never compare equal and their position in the sort cannot change a
//! result.

use std::fmt::{self, Write};

use crate::value::{Opaque, Value};

/// Formats a double the way the runtime's `Number#toString` does.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n == 0.0 {
        // Covers -0 as well.
        return "0".to_owned();
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{n}");
    }
    let sci = format!("{n:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => sci,
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        match item {
            Value::Null | Value::Undefined => {}
            other => fmt::Display::fmt(other, f)?,
        }
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::BigInt(i) => write!(f, "{i}"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::Array(items) => write_joined(f, items),
            Value::Object(_) => f.write_str("[object Object]"),
            // Not the runtime's locale-dependent `Date#toString` form.
            Value::Opaque(Opaque::Date { epoch_ms }) => {
                if epoch_ms.is_finite() {
                    write!(f, "Date({})", format_number(*epoch_ms))
                } else {
                    f.write_str("Invalid Date")
                }
            }
            Value::Opaque(Opaque::Pattern { source, flags }) => write!(f, "/{source}/{flags}"),
        }
    }
}
