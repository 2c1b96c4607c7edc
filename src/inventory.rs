//! Inventory - one entry point per user action.
//!
//! [`Inventory`] ties a [`RecordStore`], the configured [`StoreSwap`] and
//! the export path together so the CLI calls exactly one method per menu
//! choice. Each method opens, scans and closes files on its own.

use std::path::{Path, PathBuf};

use crate::common::{ProductId, Result, StoreConfig};
use crate::report::{self, ExportOutcome, Listing};
use crate::storage::record::{Product, ProductUpdate};
use crate::storage::rewrite::{self, RewriteOutcome};
use crate::storage::swap::{self, StoreSwap};
use crate::storage::RecordStore;

pub struct Inventory {
    store: RecordStore,
    swap: Box<dyn StoreSwap>,
    export_path: PathBuf,
}

impl Inventory {
    /// Inventory over the files named in `config`.
    pub fn open(config: &StoreConfig) -> Self {
        Self {
            store: RecordStore::new(config),
            swap: swap::for_mode(config.finalize),
            export_path: config.export_path.clone(),
        }
    }

    /// Replace the finalize strategy.
    pub fn with_swap(mut self, swap: Box<dyn StoreSwap>) -> Self {
        self.swap = swap;
        self
    }

    #[inline]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    #[inline]
    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    pub fn add(&self, product: &Product) -> Result<()> {
        self.store.append(product)
    }

    pub fn list(&self) -> Result<Listing> {
        report::all(&self.store)
    }

    pub fn find(&self, id: ProductId) -> Result<Option<Product>> {
        self.store.find_by_id(id)
    }

    pub fn edit(&self, id: ProductId, update: &ProductUpdate) -> Result<RewriteOutcome> {
        rewrite::edit(&self.store, self.swap.as_ref(), id, update)
    }

    pub fn delete(&self, id: ProductId) -> Result<RewriteOutcome> {
        rewrite::delete(&self.store, self.swap.as_ref(), id)
    }

    pub fn low_stock(&self) -> Result<Listing> {
        report::low_stock(&self.store)
    }

    /// Export to the configured CSV path.
    pub fn export_csv(&self) -> Result<ExportOutcome> {
        report::export_csv(&self.store, &self.export_path)
    }
}
