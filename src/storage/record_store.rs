//! Record Store - append and sequential scan over the product file.
//!
//! The [`RecordStore`] handles all direct file access for products:
//! - Appending one encoded record
//! - Scanning every record in file order
//! - Looking up the first record with a given id
//!
//! Rewrites (edit/delete) live in [`rewrite`](super::rewrite).

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::common::config::RECORD_SIZE;
use crate::common::{Error, ProductId, Result, ShortReadPolicy, StoreConfig};
use crate::storage::record::{decode, encode, Product, RecordBytes};

/// A product file on disk.
///
/// # File Layout
/// Records are laid out back to back with no header, footer or count:
/// ```text
/// ┌──────────┬──────────┬──────────┬─────────┬──────────┐
/// │ Record 0 │ Record 1 │ Record 2 │   ...   │ Record N │
/// │ (148 B)  │ (148 B)  │ (148 B)  │         │ (148 B)  │
/// └──────────┴──────────┴──────────┴─────────┴──────────┘
/// ```
/// The file size alone gives the record count.
///
/// # Handles
/// `RecordStore` holds only a path. Every operation opens its own handle
/// and drops it before returning, on success and failure alike. A missing
/// file is a normal state ("no inventory yet"), not an error.
///
/// # Concurrency
/// Single process, single thread. Nothing locks the file.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
    short_read: ShortReadPolicy,
}

impl RecordStore {
    /// Bind a store to the configured data file. Does not touch the disk.
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            path: config.data_path.clone(),
            short_read: config.short_read,
        }
    }

    /// Bind a store to `path` with the default short-read policy.
    pub fn at<P: AsRef<Path>>(path: P) -> Self {
        Self::new(&StoreConfig::new(path))
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn short_read_policy(&self) -> ShortReadPolicy {
        self.short_read
    }

    /// Whether the data file is present.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Number of complete records, from the file size.
    ///
    /// Returns 0 when the file does not exist.
    pub fn record_count(&self) -> Result<u64> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() / RECORD_SIZE as u64),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    /// Append one record at the end of the file, creating it if needed.
    ///
    /// The block is written in full and `fsync`ed. If anything fails, the
    /// file is cut back to its previous length so no partial record
    /// remains; if that also fails, `Error::TornAppend` is returned.
    ///
    /// A store that already ends in a partial record is refused under
    /// `Strict` and cut back to its last whole record under `Lenient`, so
    /// the new record always starts on a record boundary.
    pub fn append(&self, product: &Product) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        self.append_to(&mut file, product)
    }

    pub(crate) fn append_to<F: AppendFile>(&self, file: &mut F, product: &Product) -> Result<()> {
        let block = encode(product);
        let mut start = file.size()?;

        let tail = start % RECORD_SIZE as u64;
        if tail != 0 {
            let boundary = start - tail;
            match self.short_read {
                ShortReadPolicy::Strict => {
                    return Err(Error::TruncatedRecord {
                        offset: boundary,
                        found: tail as usize,
                        expected: RECORD_SIZE,
                    })
                }
                ShortReadPolicy::Lenient => {
                    warn!(path = %self.path.display(), offset = boundary, found = tail, "dropping partial trailing record before append");
                    file.truncate(boundary)?;
                    start = boundary;
                }
            }
        }

        let written = write_block(file, &block).and_then(|()| {
            file.sync()?; // fsync for durability
            Ok(())
        });

        if let Err(err) = written {
            if let Err(source) = file.truncate(start) {
                warn!(path = %self.path.display(), offset = start, "append failed, partial record left behind");
                return Err(Error::TornAppend {
                    offset: start,
                    source,
                });
            }
            return Err(err);
        }

        debug!(path = %self.path.display(), id = product.id.0, offset = start, "appended record");
        Ok(())
    }

    /// Scan every record in file order.
    ///
    /// A missing file yields an empty scan. Call again to restart.
    pub fn scan(&self) -> Result<Scan> {
        Ok(self.try_scan()?.unwrap_or_else(|| Scan::empty(self.short_read)))
    }

    /// Scan every record, or `None` if the file does not exist.
    pub fn try_scan(&self) -> Result<Option<Scan>> {
        match File::open(&self.path) {
            Ok(file) => {
                debug!(path = %self.path.display(), "scanning records");
                Ok(Some(Scan::new(file, self.short_read)))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// First record with `id` in file order, or `None`.
    pub fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        for product in self.scan()? {
            let product = product?;
            if product.id == id {
                return Ok(Some(product));
            }
        }
        Ok(None)
    }
}

/// Forward-only iterator over the records of one open file.
///
/// Yields `Err` at most once, then ends.
pub struct Scan {
    reader: Option<BufReader<File>>,
    offset: u64,
    short_read: ShortReadPolicy,
}

impl Scan {
    pub(crate) fn new(file: File, short_read: ShortReadPolicy) -> Self {
        Self {
            reader: Some(BufReader::new(file)),
            offset: 0,
            short_read,
        }
    }

    fn empty(short_read: ShortReadPolicy) -> Self {
        Self {
            reader: None,
            offset: 0,
            short_read,
        }
    }

    /// Byte offset of the next record to be read.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl Iterator for Scan {
    type Item = Result<Product>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;
        let mut block: RecordBytes = [0u8; RECORD_SIZE];

        let found = match read_block(reader, &mut block) {
            Ok(n) => n,
            Err(e) => {
                self.reader = None;
                return Some(Err(e.into()));
            }
        };

        if found == RECORD_SIZE {
            self.offset += RECORD_SIZE as u64;
            return Some(Ok(decode(&block)));
        }

        self.reader = None;
        if found == 0 {
            return None;
        }

        match self.short_read {
            ShortReadPolicy::Strict => Some(Err(Error::TruncatedRecord {
                offset: self.offset,
                found,
                expected: RECORD_SIZE,
            })),
            ShortReadPolicy::Lenient => {
                warn!(offset = self.offset, found, "ignoring partial trailing record");
                None
            }
        }
    }
}

/// The file calls an append makes besides writing.
pub(crate) trait AppendFile: Write {
    fn size(&self) -> io::Result<u64>;
    fn sync(&self) -> io::Result<()>;
    fn truncate(&self, len: u64) -> io::Result<()>;
}

impl AppendFile for File {
    fn size(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn sync(&self) -> io::Result<()> {
        self.sync_all()
    }

    fn truncate(&self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

/// Fill `block` from `reader`, returning how many bytes were read.
///
/// Less than `block.len()` means the reader hit end of file.
pub(crate) fn read_block<R: Read>(reader: &mut R, block: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < block.len() {
        match reader.read(&mut block[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Write one full record, checking the exact byte count.
pub(crate) fn write_block<W: Write>(writer: &mut W, block: &[u8]) -> Result<()> {
    let mut written = 0;
    while written < block.len() {
        match writer.write(&block[written..]) {
            Ok(0) => {
                return Err(Error::ShortWrite {
                    written,
                    expected: block.len(),
                })
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
