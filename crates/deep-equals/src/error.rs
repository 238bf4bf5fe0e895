use thiserror::Error;

/// Errors raised by the fallible edges of the crate.
///
/// The comparison itself never fails; these cover option parsing and the
/// conversion back into JSON.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeepEqualsError {
    #[error("unknown mapping mode `{0}`, expected `by_key` or `sorted_values`")]
    UnknownMappingMode(String),
    #[error("max_depth must be at least 1")]
    ZeroMaxDepth,
    #[error("{kind} value has no JSON representation")]
    NotJson { kind: &'static str },
}

pub type Result<T> = std::result::Result<T, DeepEqualsError>;
