//! Common types and utilities shared across stockfile.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`StoreConfig`]
//! - Error types
//! - Identifiers ([`ProductId`])

pub mod config;
pub mod error;
mod product_id;

pub use config::{FinalizeMode, ShortReadPolicy, StoreConfig};
pub use error::{Error, FinalizeStage, Result};
pub use product_id::ProductId;
