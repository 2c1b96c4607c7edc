//! Read-only views of the store: filters and CSV export.

pub mod csv;
mod filter;

pub use csv::{export_csv, write_csv, ExportOutcome};
pub use filter::{all, filter, low_stock, Listing};
