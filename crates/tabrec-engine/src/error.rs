//! Error types for the diff engine.

use tabrec_types::Side;

/// Errors that can occur during a comparison.
///
/// All of these are fatal: no partial result is produced.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// One of the inputs lacks the designated key column.
    #[error("{side} table has no key column {column:?}")]
    MissingKeyColumn { side: Side, column: String },

    /// The two inputs designate different key columns.
    #[error("key column mismatch: left is keyed by {left:?}, right by {right:?}")]
    KeyColumnMismatch { left: String, right: String },
}

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;
