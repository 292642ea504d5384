//! Error types for the report renderer.

use std::path::PathBuf;

use rust_xlsxwriter::XlsxError;

/// Errors that can occur while writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The output directory could not be created.
    #[error("cannot create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The spreadsheet library refused the workbook.
    #[error("xlsx error: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Convenience alias for renderer results.
pub type ReportResult<T> = Result<T, ReportError>;
