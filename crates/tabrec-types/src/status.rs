use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The row-level classification of change between the two compared tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    /// The key is absent from the left table.
    New,
    /// The key is absent from the right table.
    Deleted,
    /// The key exists on both sides and at least one field differs.
    Modified,
    /// The key exists on both sides with identical fields.
    Unchanged,
}

impl RowStatus {
    /// The lowercase textual form used in rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Deleted => "deleted",
            Self::Modified => "modified",
            Self::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowStatus {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "deleted" => Ok(Self::Deleted),
            "modified" => Ok(Self::Modified),
            "unchanged" => Ok(Self::Unchanged),
            other => Err(TypeError::UnknownStatus(other.to_string())),
        }
    }
}
