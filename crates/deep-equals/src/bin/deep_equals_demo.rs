//! Prints the canonical expected-true and expected-false comparisons.
//!
//! Usage: `deep-equals-demo`. Set `RUST_LOG=deep_equals=trace` to see why
//! individual comparisons fail.

use deep_equals::{deep_equal, BigInt, Symbol, Value};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let big = Value::BigInt(BigInt::from(9_007_199_254_740_991_i64));
    let many_a = Value::Array(vec![Value::from("a"); 1000]);

    let truthy = [
        (v(json!(1)), v(json!(1))),
        (v(json!("a")), v(json!("a"))),
        (Value::nan(), Value::nan()),
        (v(json!([])), v(json!([]))),
        (v(json!([1])), v(json!([1]))),
        (v(json!([[1, 2], [3, 4]])), v(json!([[1, 2], [3, 4]]))),
        (v(json!({"a": 1, "b": 2})), v(json!({"a": 1, "b": 2}))),
        (v(json!({"a": 1, "b": 2})), v(json!({"b": 2, "a": 1}))),
        (big.clone(), big.clone()),
        (Value::Null, Value::Null),
        (Value::Undefined, Value::Undefined),
        (many_a.clone(), many_a),
    ];
    let falsy = [
        (v(json!(1)), v(json!(0))),
        (v(json!("a")), v(json!("b"))),
        (Value::nan(), v(json!(10))),
        (Value::nan(), v(json!("NaN"))),
        (v(json!([])), v(json!([1]))),
        (v(json!([10])), v(json!([1]))),
        (v(json!([[1, 2, 3], [3, 4]])), v(json!({"1": 1}))),
        (v(json!({"a": 1, "b": 2})), v(json!({"a": 1, "b": {"c": 1}}))),
        (big, Value::BigInt(BigInt::from(900_719_925_474_099_i64))),
        (
            Value::Symbol(Symbol::new("hello")),
            Value::Symbol(Symbol::new("hello")),
        ),
        (Value::Null, v(json!({}))),
    ];

    println!("\nTRUE: \n");
    for (a, b) in &truthy {
        println!("{}", deep_equal(a, b));
    }
    println!("\nFALSE: \n");
    for (a, b) in &falsy {
        println!("{}", deep_equal(a, b));
    }
}
