use tracing::{debug, trace, warn};

use crate::collate::{sorted_keys, sorted_values};
use crate::error::Result;
use crate::options::{EqualOptions, MappingMode};
use crate::value::{Map, Shape, Value};

/// Performs a deep equality check between two values with default options.
///
/// Sequences compare positionally, mappings compare key by key regardless
/// of insertion order, `NaN` equals `NaN`, symbols compare by identity and
/// values of different shapes are never equal. The check is total: object
/// subtypes without a comparison rule simply yield `false`.
///
/// # Examples
///
/// ```
/// use deep_equals::{deep_equal, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!({"a": 1, "b": [2, 3]}));
/// let b = Value::from(json!({"b": [2, 3], "a": 1}));
/// assert!(deep_equal(&a, &b));
///
/// assert!(deep_equal(&Value::nan(), &Value::nan()));
/// assert!(!deep_equal(&Value::Null, &Value::from(json!({}))));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    Comparator::default().equals(a, b)
}

/// Same as [`deep_equal`] with explicit options.
///
/// The options are not validated: with `max_depth == 0` no composite is
/// ever entered, so even `[]` and `[]` compare unequal. Use
/// [`Comparator::try_new`] to reject such options up front.
pub fn deep_equal_with(a: &Value, b: &Value, options: &EqualOptions) -> bool {
    Comparator::new(*options).equals(a, b)
}

/// A reusable comparison configured by [`EqualOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator {
    options: EqualOptions,
}

impl Comparator {
    pub fn new(options: EqualOptions) -> Self {
        if options.mapping == MappingMode::SortedValues {
            warn!("sorted_values mapping mode compares values independently of their keys");
        }
        Self { options }
    }

    /// Like [`Comparator::new`], rejecting options that can never compare
    /// a composite.
    pub fn try_new(options: EqualOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn options(&self) -> &EqualOptions {
        &self.options
    }

    pub fn equals(&self, a: &Value, b: &Value) -> bool {
        self.equal_at(a, b, 0)
    }

    fn equal_at(&self, a: &Value, b: &Value, depth: usize) -> bool {
        match (a, b) {
            (Value::Array(x), Value::Array(y)) => match self.descend(depth) {
                Some(next) => self.sequences_equal(x, y, next),
                None => false,
            },
            (Value::Object(x), Value::Object(y)) => match self.descend(depth) {
                Some(next) => self.mappings_equal(x, y, next),
                None => false,
            },
            _ if a.shape() == Shape::Primitive && b.shape() == Shape::Primitive => {
                primitives_equal(a, b)
            }
            _ => {
                trace!(left = a.kind(), right = b.kind(), "no comparison rule for shapes");
                false
            }
        }
    }

    fn descend(&self, depth: usize) -> Option<usize> {
        if depth >= self.options.max_depth {
            self.depth_exhausted();
            return None;
        }
        Some(depth + 1)
    }

    fn depth_exhausted(&self) {
        debug!(max_depth = self.options.max_depth, "comparison depth bound reached");
    }

    fn sequences_equal(&self, a: &[Value], b: &[Value], depth: usize) -> bool {
        if a.len() != b.len() {
            return false;
        }
        a.iter()
            .zip(b)
            .all(|(x, y)| self.equal_at(x, y, depth))
    }

    fn mappings_equal(&self, a: &Map, b: &Map, depth: usize) -> bool {
        if a.len() != b.len() {
            return false;
        }
        match self.options.mapping {
            MappingMode::ByKey => a.iter().all(|(key, va)| match b.get(key) {
                Some(vb) => self.equal_at(va, vb, depth),
                None => false,
            }),
            MappingMode::SortedValues => {
                if sorted_keys(a) != sorted_keys(b) {
                    return false;
                }
                // Collation renders nested arrays, so it shares the depth budget.
                let budget = self.options.max_depth.saturating_sub(depth);
                let (Some(va), Some(vb)) = (sorted_values(a, budget), sorted_values(b, budget))
                else {
                    self.depth_exhausted();
                    return false;
                };
                va.iter()
                    .zip(&vb)
                    .all(|(x, y)| self.equal_at(x, y, depth))
            }
        }
    }
}

fn primitives_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => (x.is_nan() && y.is_nan()) || x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x.same_atom(y),
        // Different primitive types are never equal
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;
    use num_bigint::BigInt;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn nan_equals_nan() {
        assert!(deep_equal(&Value::nan(), &Value::nan()));
        assert!(!deep_equal(&Value::nan(), &Value::from(10)));
        assert!(!deep_equal(&Value::nan(), &Value::from("NaN")));
    }

    #[test]
    fn signed_zeros_are_equal() {
        assert!(deep_equal(&Value::from(0.0), &Value::from(-0.0)));
    }

    #[test]
    fn number_and_bigint_differ() {
        assert!(!deep_equal(&Value::from(1), &Value::BigInt(BigInt::from(1))));
    }

    #[test]
    fn symbols_by_identity() {
        let s = Symbol::new("hello");
        assert!(deep_equal(&Value::Symbol(s.clone()), &Value::Symbol(s)));
        assert!(!deep_equal(
            &Value::Symbol(Symbol::new("hello")),
            &Value::Symbol(Symbol::new("hello"))
        ));
    }

    #[test]
    fn opaque_values_never_equal() {
        let d = Value::date(0.0);
        assert!(!deep_equal(&d, &d));
        assert!(!deep_equal(&Value::pattern("a", ""), &Value::pattern("a", "")));
        assert!(!deep_equal(&Value::date(0.0), &v(json!({}))));
    }

    #[test]
    fn undefined_values_inside_objects() {
        let a = Value::object([("a", Value::Undefined)]);
        let b = Value::object([("b", Value::Undefined)]);
        assert!(!deep_equal(&a, &b));
        assert!(deep_equal(&a, &a.clone()));
    }

    #[test]
    fn sorted_values_reproduces_swapped_values() {
        let opts = EqualOptions::default().with_mapping(MappingMode::SortedValues);
        let a = v(json!({"a": 1, "b": 2}));
        let b = v(json!({"a": 2, "b": 1}));
        assert!(deep_equal_with(&a, &b, &opts));
        assert!(!deep_equal(&a, &b));
    }

    #[test]
    fn sorted_values_still_checks_keys() {
        let opts = EqualOptions::default().with_mapping(MappingMode::SortedValues);
        assert!(!deep_equal_with(&v(json!({"a": 1})), &v(json!({"b": 1})), &opts));
        assert!(!deep_equal_with(
            &v(json!({"a": 1, "b": 2})),
            &v(json!({"a": 1, "b": {"c": 1}})),
            &opts
        ));
        assert!(deep_equal_with(
            &v(json!({"a": [1, {"x": 2}], "b": null})),
            &v(json!({"b": null, "a": [1, {"x": 2}]})),
            &opts
        ));
    }

    #[test]
    fn depth_bound_stops_descent() {
        let nested = v(json!([[[1]]]));
        let shallow = Comparator::new(EqualOptions::default().with_max_depth(2));
        assert!(!shallow.equals(&nested, &nested.clone()));
        let enough = Comparator::new(EqualOptions::default().with_max_depth(3));
        assert!(enough.equals(&nested, &nested.clone()));
    }

    #[test]
    fn depth_bound_allows_primitives() {
        let cmp = Comparator::new(EqualOptions::default().with_max_depth(1));
        assert!(cmp.equals(&v(json!([1, 2])), &v(json!([1, 2]))));
        assert!(cmp.equals(&Value::from(1), &Value::from(1)));
    }

    #[test]
    fn deep_nesting_under_default_bound() {
        let mut a = Value::from(0);
        for _ in 0..200 {
            a = Value::Array(vec![a]);
        }
        assert!(deep_equal(&a, &a.clone()));

        let mut b = Value::from(0);
        for _ in 0..(crate::DEFAULT_MAX_DEPTH + 1) {
            b = Value::Array(vec![b]);
        }
        assert!(!deep_equal(&b, &b.clone()));
    }

    #[test]
    fn sorted_values_bounds_collation_depth() {
        let opts = EqualOptions::default()
            .with_mapping(MappingMode::SortedValues)
            .with_max_depth(4);
        let shallow = v(json!({"k": [[[0]]]}));
        assert!(deep_equal_with(&shallow, &shallow.clone(), &opts));
        let deep = v(json!({"k": [[[[[[0]]]]]]}));
        assert!(!deep_equal_with(&deep, &deep.clone(), &opts));
    }

    #[test]
    fn sorted_values_deep_input_returns_false() {
        fn nested(levels: usize) -> Value {
            let mut value = Value::from(0);
            for _ in 0..levels {
                value = Value::Array(vec![value]);
            }
            Value::object([("k", value)])
        }
        let handle = std::thread::Builder::new()
            .stack_size(32 * 1024 * 1024)
            .spawn(|| {
                let opts = EqualOptions::default().with_mapping(MappingMode::SortedValues);
                deep_equal_with(&nested(20_000), &nested(20_000), &opts)
            })
            .unwrap();
        assert!(!handle.join().unwrap());
    }

    #[test]
    fn zero_depth_rejects_every_composite() {
        let opts = EqualOptions::default().with_max_depth(0);
        assert!(!deep_equal_with(&v(json!([])), &v(json!([])), &opts));
        assert!(!deep_equal_with(&v(json!({})), &v(json!({})), &opts));
        assert!(deep_equal_with(&Value::from("a"), &Value::from("a"), &opts));
    }

    #[test]
    fn deep_equal_with_matches_comparator() {
        let opts = EqualOptions::default().with_mapping(MappingMode::SortedValues);
        let a = v(json!({"a": 1, "b": 2}));
        let b = v(json!({"a": 2, "b": 1}));
        assert_eq!(
            deep_equal_with(&a, &b, &opts),
            Comparator::new(opts).equals(&a, &b)
        );
    }

    #[test]
    fn try_new_validates() {
        assert!(Comparator::try_new(EqualOptions::default().with_max_depth(0)).is_err());
        let cmp = Comparator::try_new(EqualOptions::default()).unwrap();
        assert_eq!(cmp.options().mapping, MappingMode::ByKey);
    }
}
