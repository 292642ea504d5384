//! Report renderer for tabrec.
//!
//! Turns a reconciled [`DiffTable`] into a styled spreadsheet artifact:
//! a dated title, a tinted header row, and a highlight on every cell that
//! carries a change marker. The renderer owns no comparison logic; it is a
//! pure consumer of the engine's output contract.
//!
//! # Key Types
//!
//! - [`ReportConfig`] -- Output path, sheet name, and title configuration
//! - [`write_xlsx_report`] -- The XLSX entry point
//! - [`ReportError`] -- Renderer failures
//!
//! [`DiffTable`]: tabrec_engine::DiffTable

pub mod config;
pub mod error;
pub mod xlsx;

pub use config::ReportConfig;
pub use error::{ReportError, ReportResult};
pub use xlsx::write_xlsx_report;
