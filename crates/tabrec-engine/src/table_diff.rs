//! Reconciliation of two keyed tables into a single diff table.
//!
//! One output row per key in the union of both inputs, classified by
//! [`RowStatus`]; rows that come out `unchanged` are excluded, and a
//! comparison with nothing to report yields the explicit
//! [`DiffOutcome::NoDifferences`] rather than an empty table.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tabrec_types::{Record, RowStatus, Side, Table};

use crate::aggregate::{aggregate_field, DiffCell};
use crate::error::{EngineError, EngineResult};
use crate::partition::partition_keys;

/// A non-fatal observation that one side carries a column the other lacks.
///
/// The missing side still participates in aggregation, contributing
/// `Missing` for that column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaWarning {
    /// The side that carries the column.
    pub side: Side,
    /// The column absent from the other side.
    pub column: String,
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {:?} appears only in the {} table", self.column, self.side)
    }
}

/// One reconciled output row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRow {
    /// Normalized key text identifying the logical record.
    pub key: String,
    /// Row-level classification; never `Unchanged` in an assembled table.
    pub status: RowStatus,
    /// One cell per column of the union schema.
    pub cells: BTreeMap<String, DiffCell>,
}

impl DiffRow {
    /// The cell for `column`, if it is part of the union schema.
    pub fn cell(&self, column: &str) -> Option<&DiffCell> {
        self.cells.get(column)
    }
}

/// The reconciled table: one row per key whose status is not `unchanged`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffTable {
    /// The key column both inputs share.
    pub key_column: String,
    /// Union column schema in render order: the left table's columns first,
    /// then right-only columns. The key column itself is excluded.
    pub columns: Vec<String>,
    /// Rows ascending by key.
    pub rows: Vec<DiffRow>,
}

impl DiffTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of `new` rows.
    pub fn new_rows(&self) -> usize {
        self.count(RowStatus::New)
    }

    /// Number of `deleted` rows.
    pub fn deleted_rows(&self) -> usize {
        self.count(RowStatus::Deleted)
    }

    /// Number of `modified` rows.
    pub fn modified_rows(&self) -> usize {
        self.count(RowStatus::Modified)
    }

    fn count(&self, status: RowStatus) -> usize {
        self.rows.iter().filter(|r| r.status == status).count()
    }
}

/// The outcome of a comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffOutcome {
    /// The two tables reconcile with nothing to report.
    NoDifferences,
    /// At least one row is new, deleted, or modified.
    Differences(DiffTable),
}

impl DiffOutcome {
    /// Returns `true` if there is a table of differences.
    pub fn has_differences(&self) -> bool {
        matches!(self, Self::Differences(_))
    }

    /// The difference table, if any.
    pub fn table(&self) -> Option<&DiffTable> {
        match self {
            Self::Differences(table) => Some(table),
            Self::NoDifferences => None,
        }
    }
}

/// A comparison result plus any shape-mismatch observations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Columns present on one side only. Never fatal.
    pub warnings: Vec<SchemaWarning>,
    /// The reconciled outcome.
    pub outcome: DiffOutcome,
}

/// Compare two versions of a keyed table.
///
/// `left` is the old version, `right` the new one. Both must designate the
/// same key column and actually carry it; anything else is fatal. Keys
/// repeated within one input are pooled into a single aggregation group.
///
/// Inputs are untouched; the result is freshly allocated per call.
pub fn diff_tables(left: &Table, right: &Table) -> EngineResult<DiffReport> {
    if left.key_column() != right.key_column() {
        return Err(EngineError::KeyColumnMismatch {
            left: left.key_column().to_string(),
            right: right.key_column().to_string(),
        });
    }
    for (side, table) in [(Side::Left, left), (Side::Right, right)] {
        if !table.has_column(table.key_column()) {
            return Err(EngineError::MissingKeyColumn {
                side,
                column: table.key_column().to_string(),
            });
        }
    }

    let warnings = schema_warnings(left, right);
    for warning in &warnings {
        warn!(side = %warning.side, column = %warning.column, "input shape mismatch");
    }

    let columns = union_columns(left, right);
    let left_groups = left.records_by_key();
    let right_groups = right.records_by_key();
    let partition = partition_keys(&left.key_set(), &right.key_set());
    debug!(
        only_left = partition.only_left.len(),
        only_right = partition.only_right.len(),
        both = partition.both.len(),
        "aligned keys"
    );

    let mut all_keys: BTreeSet<&String> = left_groups.keys().collect();
    all_keys.extend(right_groups.keys());

    let mut rows = Vec::new();
    for key in all_keys {
        // Left-side records first, then right-side, each in source order.
        let mut contributing: Vec<&Record> = Vec::new();
        if let Some(group) = left_groups.get(key) {
            contributing.extend(group);
        }
        if let Some(group) = right_groups.get(key) {
            contributing.extend(group);
        }

        let mut cells = BTreeMap::new();
        let mut any_changed = false;
        for column in &columns {
            let cell = aggregate_field(&contributing, column);
            any_changed |= cell.is_changed();
            cells.insert(column.clone(), cell);
        }

        // Absence from a side takes precedence over field-level changes.
        let status = if partition.only_right.contains(key) {
            RowStatus::New
        } else if partition.only_left.contains(key) {
            RowStatus::Deleted
        } else if any_changed {
            RowStatus::Modified
        } else {
            RowStatus::Unchanged
        };

        if status == RowStatus::Unchanged {
            continue;
        }
        rows.push(DiffRow {
            key: key.clone(),
            status,
            cells,
        });
    }

    let outcome = if rows.is_empty() {
        DiffOutcome::NoDifferences
    } else {
        DiffOutcome::Differences(DiffTable {
            key_column: left.key_column().to_string(),
            columns,
            rows,
        })
    };

    Ok(DiffReport { warnings, outcome })
}

/// Union column schema: the left table's columns in source order, then
/// right-only columns in source order, with the key column excluded.
fn union_columns(left: &Table, right: &Table) -> Vec<String> {
    let key = left.key_column();
    let mut columns: Vec<String> = Vec::new();
    for column in left.columns().iter().chain(right.columns()) {
        if column != key && !columns.contains(column) {
            columns.push(column.clone());
        }
    }
    columns
}

fn schema_warnings(left: &Table, right: &Table) -> Vec<SchemaWarning> {
    let mut warnings = Vec::new();
    for column in left.columns() {
        if !right.has_column(column) {
            warnings.push(SchemaWarning {
                side: Side::Left,
                column: column.clone(),
            });
        }
    }
    for column in right.columns() {
        if !left.has_column(column) {
            warnings.push(SchemaWarning {
                side: Side::Right,
                column: column.clone(),
            });
        }
    }
    warnings
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    // Unique keys per table: with a repeated key, even a self-comparison
    // legitimately reports intra-table value variance as `modified`.
    fn arb_table() -> impl Strategy<Value = Table> {
        let cell = proptest::option::of("[a-z]{0,3}");
        proptest::collection::btree_map(0u8..8, (cell.clone(), cell), 0..8).prop_map(|rows| {
            let records = rows
                .into_iter()
                .map(|(id, (a, b))| {
                    let mut record = Record::new();
                    record.insert("id", id.to_string());
                    match a {
                        Some(text) => record.insert("a", text),
                        None => record.insert("a", tabrec_types::FieldValue::Missing),
                    }
                    match b {
                        Some(text) => record.insert("b", text),
                        None => record.insert("b", tabrec_types::FieldValue::Missing),
                    }
                    record
                })
                .collect();
            Table::new("id", vec!["id".into(), "a".into(), "b".into()], records)
        })
    }

    proptest! {
        #[test]
        fn comparing_a_table_with_itself_is_quiet(t in arb_table()) {
            let report = diff_tables(&t, &t).unwrap();
            prop_assert_eq!(report.outcome, DiffOutcome::NoDifferences);
        }

        #[test]
        fn every_row_key_comes_from_an_input(left in arb_table(), right in arb_table()) {
            let report = diff_tables(&left, &right).unwrap();
            if let DiffOutcome::Differences(table) = report.outcome {
                let left_keys = left.key_set();
                let right_keys = right.key_set();
                for row in &table.rows {
                    prop_assert!(left_keys.contains(&row.key) || right_keys.contains(&row.key));
                    prop_assert_ne!(row.status, RowStatus::Unchanged);
                }
                // Keys are unique and ascending.
                for pair in table.rows.windows(2) {
                    prop_assert!(pair[0].key < pair[1].key);
                }
            }
        }

        #[test]
        fn absence_classification_matches_key_sets(left in arb_table(), right in arb_table()) {
            let report = diff_tables(&left, &right).unwrap();
            if let DiffOutcome::Differences(table) = report.outcome {
                let left_keys = left.key_set();
                let right_keys = right.key_set();
                for row in &table.rows {
                    match row.status {
                        RowStatus::New => prop_assert!(!left_keys.contains(&row.key)),
                        RowStatus::Deleted => prop_assert!(!right_keys.contains(&row.key)),
                        RowStatus::Modified => {
                            prop_assert!(left_keys.contains(&row.key));
                            prop_assert!(right_keys.contains(&row.key));
                            prop_assert!(row.cells.values().any(|c| c.is_changed()));
                        }
                        RowStatus::Unchanged => prop_assert!(false, "unchanged row emitted"),
                    }
                }
            }
        }
    }
}
