//! Error types for the table loader.

use std::path::PathBuf;

/// Errors that can occur while loading a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The file could not be opened.
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input could not be parsed as CSV.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input has no header row at all.
    #[error("input has no header row")]
    NoHeader,
}

/// Convenience alias for loader results.
pub type TableResult<T> = Result<T, TableError>;
