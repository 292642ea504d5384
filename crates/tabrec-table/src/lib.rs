//! Table loader for tabrec.
//!
//! Parses spreadsheet-like CSV inputs into [`Table`] values ready for the
//! diff engine. The loader owns no comparison logic; its whole contract is
//! "ordered records plus a designated key column".
//!
//! # Key Types
//!
//! - [`CsvReadOptions`] -- Delimiter and NA-marker configuration
//! - [`read_csv_table`] / [`read_csv_from`] -- Path / reader entry points
//! - [`TableError`] -- Loader failures
//!
//! [`Table`]: tabrec_types::Table

pub mod csv_read;
pub mod error;

pub use csv_read::{read_csv_from, read_csv_table, CsvReadOptions};
pub use error::{TableError, TableResult};
