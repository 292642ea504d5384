use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Which of the two compared tables something came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// An ordered sequence of records with a designated key column.
///
/// The key column is what identifies a logical record across two versions
/// of the same dataset. A key may repeat within one table; all records
/// sharing a key form one group when the table is diffed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    key_column: String,
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Table {
    /// Create a table from its column schema and records.
    ///
    /// `columns` preserves the source column order; `key_column` does not
    /// have to appear in it (the diff engine reports that as an error).
    pub fn new(key_column: impl Into<String>, columns: Vec<String>, records: Vec<Record>) -> Self {
        Self {
            key_column: key_column.into(),
            columns,
            records,
        }
    }

    /// The designated key column name.
    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    /// The column schema, in source order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns `true` if `name` is part of the column schema.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// The records, in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The normalized key text of one record.
    ///
    /// A record with a missing key value normalizes to the empty string,
    /// so such records still land in a deterministic group.
    pub fn key_of(&self, record: &Record) -> String {
        record.value(&self.key_column).render().to_string()
    }

    /// The set of distinct key values present, ascending.
    ///
    /// Duplicate keys collapse to a single membership entry.
    pub fn key_set(&self) -> BTreeSet<String> {
        self.records.iter().map(|r| self.key_of(r)).collect()
    }

    /// Records grouped by normalized key, ascending by key.
    ///
    /// Within a group, records keep their source order.
    pub fn records_by_key(&self) -> BTreeMap<String, Vec<&Record>> {
        let mut groups: BTreeMap<String, Vec<&Record>> = BTreeMap::new();
        for record in &self.records {
            groups.entry(self.key_of(record)).or_default().push(record);
        }
        groups
    }
}
