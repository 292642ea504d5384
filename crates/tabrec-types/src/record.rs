use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

const MISSING: FieldValue = FieldValue::Missing;

/// One row of an input table: a mapping from column name to value.
///
/// A record does not have to carry every column of its table; a column the
/// record lacks reads as [`FieldValue::Missing`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(column, value)` pairs.
    pub fn from_pairs<C, V, I>(pairs: I) -> Self
    where
        C: Into<String>,
        V: Into<FieldValue>,
        I: IntoIterator<Item = (C, V)>,
    {
        let fields = pairs
            .into_iter()
            .map(|(c, v)| (c.into(), v.into()))
            .collect();
        Self { fields }
    }

    /// Set the value of a column.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(column.into(), value.into());
    }

    /// The value of `column`, or `Missing` when the record has no such column.
    pub fn value(&self, column: &str) -> &FieldValue {
        self.fields.get(column).unwrap_or(&MISSING)
    }

    /// Column names present on this record, ascending.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of columns present on this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record carries no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_column_reads_missing() {
        let rec = Record::from_pairs([("name", "Alice")]);
        assert_eq!(rec.value("name"), &FieldValue::text("Alice"));
        assert_eq!(rec.value("age"), &FieldValue::Missing);
    }

    #[test]
    fn insert_overwrites() {
        let mut rec = Record::new();
        rec.insert("city", "Oslo");
        rec.insert("city", "Bergen");
        assert_eq!(rec.value("city"), &FieldValue::text("Bergen"));
        assert_eq!(rec.len(), 1);
    }

    #[test]
    fn explicit_missing_is_stored() {
        let rec = Record::from_pairs([("note", FieldValue::Missing)]);
        assert!(rec.value("note").is_missing());
        assert_eq!(rec.len(), 1);
    }
}
