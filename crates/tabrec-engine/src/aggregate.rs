//! Per-field multi-value aggregation.
//!
//! For one key and one column, every contributing record (left side first,
//! then right side, each in source order) contributes one value. The
//! distinct values, in first-occurrence order, decide whether the field
//! resolved to a single value or changed.

use std::fmt;

use serde::{Deserialize, Serialize};

use tabrec_types::{FieldValue, Record};

/// Separator between the distinct values of a changed field.
///
/// Downstream consumers may pattern-match rendered cells on this literal
/// to decide highlighting.
pub const CHANGE_SEPARATOR: &str = "--> ";

/// An ordered, deduplicated list of the distinct values observed for one
/// field across both sides.
///
/// Left-side values are enumerated before right-side ones, so the rendered
/// form reads as old value(s) `--> ` new value(s).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeMarker {
    /// Distinct values in first-occurrence order; always two or more when
    /// produced by [`aggregate_field`].
    pub values: Vec<FieldValue>,
}

impl ChangeMarker {
    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the marker holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rendered text, e.g. `"Alice--> Alicia"`. Missing values render empty.
    pub fn render(&self) -> String {
        self.values
            .iter()
            .map(FieldValue::render)
            .collect::<Vec<_>>()
            .join(CHANGE_SEPARATOR)
    }
}

impl fmt::Display for ChangeMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// One cell of the reconciled table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffCell {
    /// The field resolved to a single value across all contributing records.
    Value(FieldValue),
    /// More than one distinct value was observed.
    Changed(ChangeMarker),
}

impl DiffCell {
    /// Returns `true` if the cell carries a change marker.
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    /// Rendered text of the cell. Changed cells contain [`CHANGE_SEPARATOR`].
    pub fn render(&self) -> String {
        match self {
            Self::Value(value) => value.render().to_string(),
            Self::Changed(marker) => marker.render(),
        }
    }
}

impl fmt::Display for DiffCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Aggregate one column over every record contributing to a key.
///
/// `records` must list all left-side records first, then all right-side
/// ones, each side in source order. A record lacking the column contributes
/// `Missing`, which is its own distinct value and never collapses into any
/// present text.
pub fn aggregate_field(records: &[&Record], column: &str) -> DiffCell {
    let mut distinct: Vec<FieldValue> = Vec::new();
    for record in records {
        let value = record.value(column);
        if !distinct.contains(value) {
            distinct.push(value.clone());
        }
    }

    if distinct.len() == 1 {
        DiffCell::Value(distinct.remove(0))
    } else {
        DiffCell::Changed(ChangeMarker { values: distinct })
    }
}
