//! Key alignment: partition the union of two key sets.
//!
//! The partition is computed by plain set difference and intersection, so
//! it is deterministic for the same inputs; `BTreeSet` keeps every set
//! ascending by key.

use std::collections::BTreeSet;

/// The union of both tables' keys split into three disjoint sets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPartition {
    /// Keys present only in the left table.
    pub only_left: BTreeSet<String>,
    /// Keys present only in the right table.
    pub only_right: BTreeSet<String>,
    /// Keys present in both tables.
    pub both: BTreeSet<String>,
}

impl KeyPartition {
    /// Create an empty partition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys in the union.
    pub fn len(&self) -> usize {
        self.only_left.len() + self.only_right.len() + self.both.len()
    }

    /// Returns `true` if both inputs were empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split `left` and `right` key sets into only-left / only-right / both.
pub fn partition_keys(left: &BTreeSet<String>, right: &BTreeSet<String>) -> KeyPartition {
    KeyPartition {
        only_left: left.difference(right).cloned().collect(),
        only_right: right.difference(left).cloned().collect(),
        both: left.intersection(right).cloned().collect(),
    }
}
