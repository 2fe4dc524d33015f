//! Single-key dimension mappings produced by `Rectangle::dimensions`.
//!
//! - `Dimension::Length(v)` reads as `{"length": v}`.
//! - `Dimension::Width(v)` reads as `{"width": v}`.
//!
//! The serde representation is externally tagged, so each value serializes to
//! a one-entry object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named dimension of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length(i64),
    Width(i64),
}

impl Dimension {
    /// Key of the mapping.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Length(_) => "length",
            Dimension::Width(_) => "width",
        }
    }

    #[inline]
    pub fn value(&self) -> i64 {
        match *self {
            Dimension::Length(v) | Dimension::Width(v) => v,
        }
    }

    /// The `(key, value)` entry of the mapping.
    #[inline]
    pub fn entry(&self) -> (&'static str, i64) {
        (self.name(), self.value())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"{}\": {}}}", self.name(), self.value())
    }
}
