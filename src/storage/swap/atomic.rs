//! Single-rename finalize.

use std::path::Path;

use tracing::{info, warn};

use crate::common::{Error, FinalizeStage, Result};

use super::{FileOps, StoreSwap};

/// Renames the staged file directly over the store.
///
/// On POSIX filesystems `rename` replaces the target atomically, so the
/// store is either the old file or the new one, never absent. On failure
/// the staged file is left for the caller to clean up.
pub struct AtomicRename<F: FileOps> {
    fs: F,
}

impl<F: FileOps> AtomicRename<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileOps> StoreSwap for AtomicRename<F> {
    fn swap(&self, staged: &Path, store: &Path) -> Result<()> {
        match self.fs.rename(staged, store) {
            Ok(()) => {
                info!(store = %store.display(), "replaced store");
                Ok(())
            }
            Err(source) => {
                warn!(store = %store.display(), error = %source, "rename over store failed, store unchanged");
                Err(Error::Finalize {
                    stage: FinalizeStage::Rename,
                    staged: None,
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::swap::StdFileOps;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_rename_replaces_store() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("inventory.dat");
        let staged = dir.path().join("staged.tmp");
        std::fs::write(&store, b"old").unwrap();
        std::fs::write(&staged, b"new").unwrap();

        AtomicRename::new(StdFileOps).swap(&staged, &store).unwrap();

        assert_eq!(std::fs::read(&store).unwrap(), b"new");
        assert!(!staged.exists());
    }

    #[test]
    fn test_atomic_rename_failure_keeps_store() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("inventory.dat");
        std::fs::write(&store, b"old").unwrap();

        let err = AtomicRename::new(StdFileOps)
            .swap(&dir.path().join("missing.tmp"), &store)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Finalize {
                stage: FinalizeStage::Rename,
                ..
            }
        ));
        assert_eq!(std::fs::read(&store).unwrap(), b"old");
    }
}
