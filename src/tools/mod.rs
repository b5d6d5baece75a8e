//! Rotulo tools module
//!
//! Command implementations behind the `rotulo` binary.

pub mod export;
pub mod label;

pub use export::{export_label, ExportFormat, ExportOptions, ExportResponse};
pub use label::{load_record, read_record};
