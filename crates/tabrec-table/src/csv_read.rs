//! CSV ingestion.
//!
//! Cells are kept as raw text; the only interpretation applied is the NA
//! normalization: an empty cell, or one whose text equals a configured NA
//! marker, loads as [`FieldValue::Missing`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use tabrec_types::{FieldValue, Record, Table};

use crate::error::{TableError, TableResult};

/// Options controlling CSV ingestion.
#[derive(Clone, Debug)]
pub struct CsvReadOptions {
    /// Field delimiter.
    pub delimiter: u8,
    /// Cell texts treated as a missing value, in addition to the empty cell.
    pub na_markers: Vec<String>,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            na_markers: vec!["NA".to_string()],
        }
    }
}

impl CsvReadOptions {
    fn normalize(&self, raw: &str) -> FieldValue {
        if raw.is_empty() || self.na_markers.iter().any(|m| m == raw) {
            FieldValue::Missing
        } else {
            FieldValue::text(raw)
        }
    }
}

/// Load a keyed table from a CSV file.
///
/// The first row is the header and becomes the column schema in source
/// order. The key column is only recorded here; whether it actually exists
/// is the diff engine's contract to check.
pub fn read_csv_table(
    path: impl AsRef<Path>,
    key_column: &str,
    options: &CsvReadOptions,
) -> TableResult<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TableError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_csv_from(file, key_column, options)?;
    debug!(
        path = %path.display(),
        records = table.len(),
        columns = table.columns().len(),
        "loaded table"
    );
    Ok(table)
}

/// Load a keyed table from any reader producing CSV text.
pub fn read_csv_from(
    input: impl Read,
    key_column: &str,
    options: &CsvReadOptions,
) -> TableResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(TableError::NoHeader);
    }
    let columns: Vec<String> = headers.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let mut record = Record::new();
        for (column, raw) in columns.iter().zip(row.iter()) {
            record.insert(column.clone(), options.normalize(raw));
        }
        records.push(record);
    }

    Ok(Table::new(key_column, columns, records))
}
