//! Search scope selector.

use serde::{Deserialize, Serialize};

/// How far a name search reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Every live item in the tree.
    #[default]
    Global,
    /// Direct children of one folder.
    Current,
}

impl SearchScope {
    /// Reads a `scope` query value. Anything other than `current` is global.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("current") => Self::Current,
            _ => Self::Global,
        }
    }
}
