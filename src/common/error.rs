//! Error types for stockfile.

use std::fmt;
use std::path::PathBuf;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Which half of the remove-then-rename finalize step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalizeStage {
    /// Removing the old store file. The store is still intact.
    Remove,
    /// Moving the staged file into the store's place.
    Rename,
}

impl fmt::Display for FinalizeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinalizeStage::Remove => write!(f, "remove"),
            FinalizeStage::Rename => write!(f, "rename"),
        }
    }
}

/// All possible errors in stockfile.
///
/// "ID not found" and "no inventory file" are not errors; operations
/// report them through their outcome types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error from opening, reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store ends with a block shorter than one record.
    ///
    /// Only raised under `ShortReadPolicy::Strict`.
    #[error("truncated record at byte {offset}: read {found} of {expected} bytes")]
    TruncatedRecord {
        offset: u64,
        found: usize,
        expected: usize,
    },

    /// A writer accepted fewer bytes than one full record.
    #[error("short write: wrote {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    /// An append failed and the partial tail could not be cut off.
    ///
    /// The store may now end with a partial record starting at `offset`.
    #[error("append failed and store could not be restored to {offset} bytes: {source}")]
    TornAppend {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    /// Swapping the staged file in for the store failed.
    ///
    /// When `staged` is set, the rewritten contents survive at that path.
    #[error("failed to finalize rewrite ({stage} step): {source}")]
    Finalize {
        stage: FinalizeStage,
        staged: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// Interactive input ended before a value was read.
    #[error("input closed")]
    InputClosed,
}
