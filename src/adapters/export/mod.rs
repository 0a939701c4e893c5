//! Export adapters. Implement ExportPort.

pub mod csv_export;

pub use csv_export::{CsvExporter, entries_to_csv};
