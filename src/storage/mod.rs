//! Storage layer - the product file and how it changes.
//!
//! - [`record`] - Product entity and fixed-width codec
//! - [`RecordStore`] - Append and sequential scan
//! - [`rewrite`] - Copy-filter-rename for edit and delete
//! - [`swap`] - Finalize strategies for a rewrite

pub mod record;
mod record_store;
pub mod rewrite;
pub mod swap;

pub use record_store::{RecordStore, Scan};
pub use rewrite::{Decision, RewriteOutcome};
