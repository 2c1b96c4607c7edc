//! Copy-filter-rename: the only way records are changed or removed.
//!
//! Edit and delete both rebuild the whole store:
//! 1. Scan the store and stream every record through a [`Decision`]
//!    function into a uniquely named staging file in the same directory.
//! 2. Flush and `fsync` the staging file.
//! 3. Hand it to a [`StoreSwap`] that puts it in the store's place.
//!
//! Any failure in step 1 or 2 drops the staging file and leaves the store
//! untouched. Step 3 failures are reported as `Error::Finalize`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::common::{Error, ProductId, Result};
use crate::storage::record::{encode, Product, ProductUpdate};
use crate::storage::record_store::{write_block, RecordStore};
use crate::storage::swap::StoreSwap;

/// What to do with one record during a rewrite.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Copy the record unchanged.
    Keep,
    /// Write this record in its place.
    Replace(Product),
    /// Write nothing.
    Drop,
}

/// Result of a rewrite that completed without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// At least one record was replaced or dropped.
    Applied,
    /// Every record was kept. The store was still rewritten, byte for byte.
    NotFound,
    /// The store file does not exist. Nothing was written.
    NoInventory,
}

/// Rewrite the store, applying `decide` to each record in file order.
///
/// The rewritten store keeps the permissions of the one it replaces.
pub fn rewrite<F>(store: &RecordStore, swap: &dyn StoreSwap, decide: F) -> Result<RewriteOutcome>
where
    F: FnMut(&Product) -> Decision,
{
    rewrite_with(store, swap, BufWriter::new, decide)
}

/// [`rewrite`] with the writer over the staging file supplied by `stage`.
fn rewrite_with<F, S, W>(
    store: &RecordStore,
    swap: &dyn StoreSwap,
    stage: S,
    mut decide: F,
) -> Result<RewriteOutcome>
where
    F: FnMut(&Product) -> Decision,
    S: FnOnce(File) -> W,
    W: Write,
{
    let Some(scan) = store.try_scan()? else {
        return Ok(RewriteOutcome::NoInventory);
    };

    let staged = tempfile::Builder::new()
        .prefix(".stockfile-")
        .suffix(".tmp")
        .tempfile_in(staging_dir(store.path()))?;
    staged
        .as_file()
        .set_permissions(fs::metadata(store.path())?.permissions())?;

    let mut matched = false;
    let mut written = 0u64;
    {
        let mut writer = stage(staged.as_file().try_clone()?);
        for product in scan {
            let product = product?;
            let out = match decide(&product) {
                Decision::Keep => Some(product),
                Decision::Replace(replacement) => {
                    matched = true;
                    Some(replacement)
                }
                Decision::Drop => {
                    matched = true;
                    None
                }
            };
            if let Some(record) = out {
                write_block(&mut writer, &encode(&record))?;
                written += 1;
            }
        }
        writer.flush()?;
    }
    staged.as_file().sync_all()?;

    debug!(store = %store.path().display(), matched, written, "staged rewrite");

    let staged = staged.into_temp_path();
    match swap.swap(&staged, store.path()) {
        Ok(()) => {}
        Err(err @ Error::Finalize { staged: Some(_), .. }) => {
            // The store is gone; the staged file is the only copy left.
            if let Err(e) = staged.keep() {
                warn!(error = %e, "could not keep staged file");
            }
            return Err(err);
        }
        Err(err) => return Err(err),
    }

    Ok(if matched {
        RewriteOutcome::Applied
    } else {
        RewriteOutcome::NotFound
    })
}

/// Replace the first record with `id` by `update` applied to it.
pub fn edit(
    store: &RecordStore,
    swap: &dyn StoreSwap,
    id: ProductId,
    update: &ProductUpdate,
) -> Result<RewriteOutcome> {
    let mut done = false;
    rewrite(store, swap, |product| {
        if !done && product.id == id {
            done = true;
            Decision::Replace(update.apply(product))
        } else {
            Decision::Keep
        }
    })
}

/// Remove the first record with `id`.
pub fn delete(store: &RecordStore, swap: &dyn StoreSwap, id: ProductId) -> Result<RewriteOutcome> {
    let mut done = false;
    rewrite(store, swap, |product| {
        if !done && product.id == id {
            done = true;
            Decision::Drop
        } else {
            Decision::Keep
        }
    })
}

fn staging_dir(store: &Path) -> &Path {
    match store.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
