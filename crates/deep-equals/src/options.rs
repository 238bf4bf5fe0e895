//! Comparison options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DeepEqualsError, Result};

/// Default bound on how many composite levels a comparison may enter.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// How two mappings with the same key count are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingMode {
    /// Every key present on both sides with deep-equal values.
    #[default]
    ByKey,
    /// Sorted key lists and independently sorted value lists must match.
    ///
    /// Values are decoupled from their keys, so `{a:1,b:2}` equals
    /// `{a:2,b:1}` in this mode. Only use it to reproduce legacy results.
    SortedValues,
}

impl MappingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            MappingMode::ByKey => "by_key",
            MappingMode::SortedValues => "sorted_values",
        }
    }
}

impl fmt::Display for MappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MappingMode {
    type Err = DeepEqualsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "by_key" => Ok(MappingMode::ByKey),
            "sorted_values" => Ok(MappingMode::SortedValues),
            _ => Err(DeepEqualsError::UnknownMappingMode(s.to_owned())),
        }
    }
}

/// Options for [`crate::deep_equal_with`] and [`crate::Comparator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EqualOptions {
    pub mapping: MappingMode,
    pub max_depth: usize,
}

impl Default for EqualOptions {
    fn default() -> Self {
        Self {
            mapping: MappingMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EqualOptions {
    pub fn with_mapping(mut self, mapping: MappingMode) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(DeepEqualsError::ZeroMaxDepth);
        }
        Ok(())
    }
}
