//! deep-equals - Structural deep equality for dynamically shaped values.
//!
//! Values are modeled as the closed [`Value`] union: primitives (including
//! `undefined`, big integers and identity-compared [`Symbol`]s), ordered
//! sequences and keyed mappings. [`deep_equal`] compares two of them
//! recursively and never fails; shapes without a comparison rule are simply
//! unequal.
//!
//! Mapping comparison is configurable through [`EqualOptions`], which also
//! bounds the recursion depth.

mod collate;
mod deep_equal;
mod display;
mod error;
mod json;
mod options;
mod symbol;
mod value;

pub use deep_equal::{deep_equal, deep_equal_with, Comparator};
pub use display::format_number;
pub use error::{DeepEqualsError, Result};
pub use options::{EqualOptions, MappingMode, DEFAULT_MAX_DEPTH};
pub use symbol::Symbol;
pub use value::{Map, Opaque, Shape, Value};

pub use num_bigint::BigInt;
