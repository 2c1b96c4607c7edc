//! CSV export.
//!
//! Output is one header line followed by one line per record:
//! ```text
//! ID,Name,Category,Quantity,Price,Supplier
//! 7,"Bob""s Widget","Hardware",12,2.50,"Acme"
//! ```
//! Text fields are always quoted with inner quotes doubled; numbers are
//! bare and the price has exactly two decimals.
//!
//! Unlike edit and delete, export writes the target in place. If it fails
//! partway, whatever was at `path` before is gone and the new file is
//! incomplete.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::common::Result;
use crate::storage::record::Product;
use crate::storage::RecordStore;

pub const CSV_HEADER: &str = "ID,Name,Category,Quantity,Price,Supplier";

/// Result of an export that completed without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The file was written with this many data rows.
    Exported { rows: u64 },
    /// There is no store file; no export file was created.
    NoInventory,
}

/// Wrap `text` in quotes, doubling any quote inside it.
pub fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// One CSV line for `product`, without the line terminator.
pub fn csv_row(product: &Product) -> String {
    format!(
        "{},{},{},{},{:.2},{}",
        product.id,
        quote(&product.name),
        quote(&product.category),
        product.quantity,
        product.price,
        quote(&product.supplier),
    )
}

/// Write the header and one row per product to `writer`.
///
/// Stops at the first error from `products` or from `writer`.
pub fn write_csv<I, W>(products: I, mut writer: W) -> Result<u64>
where
    I: IntoIterator<Item = Result<Product>>,
    W: Write,
{
    writeln!(writer, "{}", CSV_HEADER)?;

    let mut rows = 0;
    for product in products {
        writeln!(writer, "{}", csv_row(&product?))?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}

/// Export every record in `store` to a CSV file at `path`.
pub fn export_csv<P: AsRef<Path>>(store: &RecordStore, path: P) -> Result<ExportOutcome> {
    let Some(scan) = store.try_scan()? else {
        return Ok(ExportOutcome::NoInventory);
    };

    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    let rows = write_csv(scan, &mut writer)?;
    writer.get_ref().sync_all()?;

    debug!(path = %path.display(), rows, "exported csv");
    Ok(ExportOutcome::Exported { rows })
}
