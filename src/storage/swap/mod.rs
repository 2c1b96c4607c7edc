//! Finalize strategies for the copy-filter-rename protocol.
//!
//! Once a rewrite has been staged in full, a [`StoreSwap`] puts it in the
//! store's place:
//! - [`AtomicRename`] - one `rename` over the existing store
//! - [`RemoveThenRename`] - delete the store, then rename the staged file
//!
//! Filesystem calls go through [`FileOps`] so the window between the two
//! steps of [`RemoveThenRename`] can be exercised in tests.

mod atomic;
mod remove_rename;

use std::io;
use std::path::Path;

use crate::common::{FinalizeMode, Result};

pub use atomic::AtomicRename;
pub use remove_rename::RemoveThenRename;

/// Replaces the store file with a fully written staged file.
pub trait StoreSwap {
    /// Move `staged` to `store`.
    ///
    /// On failure the error says whether the staged contents are still
    /// on disk; the store may or may not exist, depending on the strategy.
    fn swap(&self, staged: &Path, store: &Path) -> Result<()>;
}

/// The two filesystem calls a swap needs.
pub trait FileOps {
    fn remove(&self, path: &Path) -> io::Result<()>;
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// [`FileOps`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileOps;

impl FileOps for StdFileOps {
    fn remove(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}

/// The strategy selected by `mode`, on the real filesystem.
pub fn for_mode(mode: FinalizeMode) -> Box<dyn StoreSwap> {
    match mode {
        FinalizeMode::AtomicRename => Box::new(AtomicRename::new(StdFileOps)),
        FinalizeMode::RemoveThenRename => Box::new(RemoveThenRename::new(StdFileOps)),
    }
}
