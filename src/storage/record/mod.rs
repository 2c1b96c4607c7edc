//! Product records and their fixed-width encoding.
//!
//! - [`Product`] / [`ProductUpdate`] - the entity and edit values
//! - [`codec`] - `encode` / `decode` against the on-disk layout

pub mod codec;
mod product;

pub use codec::{decode, encode, RecordBytes};
pub use product::{Product, ProductUpdate};
