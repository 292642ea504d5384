//! Diff engine for tabrec.
//!
//! Compares two versions of a keyed table and produces a single reconciled
//! table: one row per key that exists in either input, each row classified
//! as new, deleted, or modified, and each field carrying either its common
//! value or an ordered marker of the distinct values observed.
//!
//! The computation is synchronous and side-effect-free: inputs are never
//! mutated and every call allocates a fresh result, so independent
//! comparisons may run concurrently.
//!
//! # Key Types
//!
//! - [`DiffReport`] / [`DiffOutcome`] -- Comparison result, with an explicit "no differences" case
//! - [`DiffTable`] / [`DiffRow`] -- The reconciled output table
//! - [`DiffCell`] / [`ChangeMarker`] -- Per-field resolved value or ordered change marker
//! - [`KeyPartition`] -- Key alignment between the two inputs
//! - [`SchemaWarning`] -- Non-fatal column shape mismatch observation

pub mod aggregate;
pub mod error;
pub mod partition;
pub mod table_diff;

pub use aggregate::{aggregate_field, ChangeMarker, DiffCell, CHANGE_SEPARATOR};
pub use error::{EngineError, EngineResult};
pub use partition::{partition_keys, KeyPartition};
pub use table_diff::{diff_tables, DiffOutcome, DiffReport, DiffRow, DiffTable, SchemaWarning};
