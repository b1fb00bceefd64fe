use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one matrix row/column while clusters merge.
///
/// Rows start as leaves named after their gene. After a merge the absorbing
/// row becomes an internal node numbered `merge_index + N`, so internal ids
/// never collide with each other and are never mistaken for a leaf, even a
/// leaf literally named `"7"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterLabel {
    Leaf(String),
    Internal(usize),
}

impl ClusterLabel {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::Leaf(name.into())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// The internal node id, if this label names a merged cluster.
    pub fn internal_id(&self) -> Option<usize> {
        match self {
            Self::Internal(id) => Some(*id),
            Self::Leaf(_) => None,
        }
    }

    /// Text form of this label once its column has been retired.
    pub fn render_retired(&self, marker: char) -> String {
        format!("{marker}{self}")
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(name) => f.write_str(name),
            Self::Internal(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for ClusterLabel {
    fn from(name: &str) -> Self {
        Self::Leaf(name.to_string())
    }
}
