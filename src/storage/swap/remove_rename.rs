//! Two-step finalize: remove the store, then rename the staged file.

use std::path::Path;

use tracing::{info, warn};

use crate::common::{Error, FinalizeStage, Result};

use super::{FileOps, StoreSwap};

/// Deletes the store, then renames the staged file into its place.
///
/// This is the protocol older builds used. Between the two calls the
/// store does not exist. If the rename fails there, the error carries the
/// staged path so the rewritten inventory can be recovered by hand.
pub struct RemoveThenRename<F: FileOps> {
    fs: F,
}

impl<F: FileOps> RemoveThenRename<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileOps> StoreSwap for RemoveThenRename<F> {
    fn swap(&self, staged: &Path, store: &Path) -> Result<()> {
        if let Err(source) = self.fs.remove(store) {
            warn!(store = %store.display(), error = %source, "could not remove store, rewrite discarded");
            return Err(Error::Finalize {
                stage: FinalizeStage::Remove,
                staged: None,
                source,
            });
        }

        if let Err(source) = self.fs.rename(staged, store) {
            warn!(
                store = %store.display(),
                staged = %staged.display(),
                error = %source,
                "store removed but staged file not renamed; inventory only exists at staged path"
            );
            return Err(Error::Finalize {
                stage: FinalizeStage::Rename,
                staged: Some(staged.to_path_buf()),
                source,
            });
        }

        info!(store = %store.display(), "replaced store");
        Ok(())
    }
}
