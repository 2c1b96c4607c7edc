//! Configuration for stockfile.
//!
//! Compile-time constants pin down the on-disk record format and the
//! reporting threshold. [`StoreConfig`] carries the runtime choices: where
//! the files live and which policies the storage layer applies.

use std::path::{Path, PathBuf};

/// Capacity of the `name` field in bytes (49 visible bytes + NUL).
pub const NAME_CAPACITY: usize = 50;

/// Capacity of the `category` field in bytes (29 visible bytes + NUL).
pub const CATEGORY_CAPACITY: usize = 30;

/// Capacity of the `supplier` field in bytes (49 visible bytes + NUL).
pub const SUPPLIER_CAPACITY: usize = 50;

/// Size of one product record on disk.
///
/// Matches the memory layout of a C `struct product { char name[50]; int id;
/// char category[30]; int quantity; char supplier[50]; float price; }` on
/// x86-64, alignment padding included:
/// ```text
/// 50 name + 2 pad + 4 id + 30 category + 2 pad + 4 quantity
///   + 50 supplier + 2 pad + 4 price = 148
/// ```
pub const RECORD_SIZE: usize = 148;

/// Products with a quantity strictly below this are "low stock".
pub const LOW_STOCK_THRESHOLD: i32 = 10;

/// Default record file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "inventory.dat";

/// Default CSV export target, relative to the working directory.
pub const DEFAULT_EXPORT_FILE: &str = "inventory.csv";

/// How a scan treats a trailing block shorter than [`RECORD_SIZE`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ShortReadPolicy {
    /// Report `Error::TruncatedRecord` at the offset of the partial block.
    #[default]
    Strict,
    /// Stop the scan silently, as if the file ended at the last full record.
    Lenient,
}

/// How edit and delete swap the staged file in for the store.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FinalizeMode {
    /// Rename the staged file over the store in one step.
    #[default]
    AtomicRename,
    /// Remove the store, then rename the staged file into its place.
    ///
    /// A failure between the two steps leaves no store file behind.
    RemoveThenRename,
}

/// Runtime configuration for a record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the binary record file.
    pub data_path: PathBuf,
    /// Path written by CSV export.
    pub export_path: PathBuf,
    /// Treatment of a partial trailing record.
    pub short_read: ShortReadPolicy,
    /// Finalize strategy for the copy-filter-rename protocol.
    pub finalize: FinalizeMode,
}

impl StoreConfig {
    /// Configuration for a record file at `data_path`, other settings default.
    pub fn new<P: AsRef<Path>>(data_path: P) -> Self {
        Self {
            data_path: data_path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn with_export_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.export_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_short_read(mut self, policy: ShortReadPolicy) -> Self {
        self.short_read = policy;
        self
    }

    pub fn with_finalize(mut self, mode: FinalizeMode) -> Self {
        self.finalize = mode;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            short_read: ShortReadPolicy::default(),
            finalize: FinalizeMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_size_matches_field_layout() {
        let fields = NAME_CAPACITY + 4 + CATEGORY_CAPACITY + 4 + SUPPLIER_CAPACITY + 4;
        // Three 2-byte alignment gaps before each 4-byte field that follows text.
        assert_eq!(fields + 6, RECORD_SIZE);
        assert_eq!(RECORD_SIZE % 4, 0);
    }

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.data_path, PathBuf::from("inventory.dat"));
        assert_eq!(config.export_path, PathBuf::from("inventory.csv"));
        assert_eq!(config.short_read, ShortReadPolicy::Strict);
        assert_eq!(config.finalize, FinalizeMode::AtomicRename);
    }

    #[test]
    fn test_builder_overrides() {
        let config = StoreConfig::new("/tmp/stock.dat")
            .with_export_path("/tmp/stock.csv")
            .with_short_read(ShortReadPolicy::Lenient)
            .with_finalize(FinalizeMode::RemoveThenRename);

        assert_eq!(config.data_path, PathBuf::from("/tmp/stock.dat"));
        assert_eq!(config.export_path, PathBuf::from("/tmp/stock.csv"));
        assert_eq!(config.short_read, ShortReadPolicy::Lenient);
        assert_eq!(config.finalize, FinalizeMode::RemoveThenRename);
    }
}
