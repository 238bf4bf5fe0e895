//! Default-sort collation used by [`MappingMode::SortedValues`].
//!
//! Elements are ordered by their display string compared as UTF-16 code
//! units, stably, with `undefined` always placed last.
//!
//! [`MappingMode::SortedValues`]: crate::MappingMode::SortedValues

use std::cmp::Ordering;

use crate::value::{Map, Value};

fn utf16_cmp(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

pub(crate) fn sorted_keys(map: &Map) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_by(|a, b| utf16_cmp(a, b));
    keys
}

/// Whether rendering `value` nests no more than `budget` arrays deep.
///
/// Only arrays recurse when rendered; objects print as a fixed tag.
fn renders_within(value: &Value, budget: usize) -> bool {
    match value {
        Value::Array(items) => {
            budget > 0 && items.iter().all(|item| renders_within(item, budget - 1))
        }
        _ => true,
    }
}

/// Values of `map` in collation order, or `None` when rendering one of them
/// would nest deeper than `budget`.
pub(crate) fn sorted_values(map: &Map, budget: usize) -> Option<Vec<&Value>> {
    if !map.values().all(|v| renders_within(v, budget)) {
        return None;
    }
    let (defined, undefined): (Vec<&Value>, Vec<&Value>) =
        map.values().partition(|v| !v.is_undefined());
    let mut keyed: Vec<(String, &Value)> =
        defined.into_iter().map(|v| (v.to_string(), v)).collect();
    keyed.sort_by(|(a, _), (b, _)| utf16_cmp(a, b));
    Some(keyed.into_iter().map(|(_, v)| v).chain(undefined).collect())
}
