//! stockfile - a single-user inventory tracker over a fixed-width record file.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           stockfile                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 CLI (cli/)                               │   │
//! │  │        Args → Session menu loop → Prompter               │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Inventory (one call per action)             │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Reporting (report/)                         │   │
//! │  │        low-stock filter  |  CSV export                   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Storage (storage/)                          │   │
//! │  │   RecordStore (append/scan) + rewrite (copy-filter-      │   │
//! │  │   rename) + swap strategies + record codec               │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (ProductId, Error, config)
//! - [`storage`] - Record codec, record store and the rewrite protocol
//! - [`report`] - Filters and CSV export
//! - [`inventory`] - Facade used by the CLI
//! - [`cli`] - Menu loop and prompts
//!
//! # Quick Start
//! ```no_run
//! use stockfile::{Inventory, Product, ProductId, StoreConfig};
//!
//! let inventory = Inventory::open(&StoreConfig::new("inventory.dat"));
//! inventory.add(&Product::new(1, "Widget", "Hardware", 4, 2.5, "Acme")).unwrap();
//!
//! let found = inventory.find(ProductId::new(1)).unwrap();
//! assert!(found.is_some());
//! ```

pub mod cli;
pub mod common;
pub mod inventory;
pub mod report;
pub mod storage;

// Re-export commonly used items at crate root for convenience
pub use common::config::{LOW_STOCK_THRESHOLD, RECORD_SIZE};
pub use common::{Error, FinalizeMode, ProductId, Result, ShortReadPolicy, StoreConfig};

pub use inventory::Inventory;
pub use report::{ExportOutcome, Listing};
pub use storage::record::{Product, ProductUpdate};
pub use storage::{RecordStore, RewriteOutcome};
