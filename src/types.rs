//! Typed identifiers and match values shared by every stage of a run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a candidate point.
///
/// Tags come straight from the match files and from the `simulation_id`
/// column of the record tables. They are compared byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag(String);

impl Tag {
    pub fn new(tag: impl Into<String>) -> Self {
        Tag(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Tag(s.to_string())
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Tag(s)
    }
}

/// Precomputed similarity between two points.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct MatchValue(f64);

impl MatchValue {
    pub fn new(value: f64) -> Self {
        MatchValue(value)
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Strictly greater than the threshold. A value equal to the threshold
    /// never counts as a neighbor.
    pub fn exceeds(self, threshold: f64) -> bool {
        self.0 > threshold
    }
}

impl fmt::Display for MatchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
