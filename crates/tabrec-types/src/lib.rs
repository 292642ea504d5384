//! Foundation types for tabrec.
//!
//! This crate provides the tabular data model shared by the loader, the
//! diff engine, and the report renderer. Every other tabrec crate depends
//! on `tabrec-types`.
//!
//! # Key Types
//!
//! - [`FieldValue`] — A scalar cell value, normalized to text, with a distinct missing form
//! - [`Record`] — One row: a mapping from column name to [`FieldValue`]
//! - [`Table`] — An ordered sequence of records with a designated key column
//! - [`RowStatus`] — Row-level change classification (`new` / `deleted` / `modified` / `unchanged`)
//! - [`Side`] — Which of the two compared tables something came from

pub mod error;
pub mod record;
pub mod status;
pub mod table;
pub mod value;

pub use error::TypeError;
pub use record::Record;
pub use status::RowStatus;
pub use table::{Side, Table};
pub use value::FieldValue;
