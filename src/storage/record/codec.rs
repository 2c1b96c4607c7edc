//! Fixed-width binary encoding of a [`Product`].
//!
//! Every record is exactly [`RECORD_SIZE`] bytes and decodes on its own:
//! there are no delimiters, lengths or offsets inside a record, so record
//! `N` always starts at byte `N × RECORD_SIZE`.
//!
//! # Layout (148 bytes, little-endian)
//! ```text
//! Offset  Size  Field
//! ------  ----  -----
//! 0       50    name      (NUL-terminated, NUL-padded)
//! 50      2     padding   (zero)
//! 52      4     id        (i32)
//! 56      30    category  (NUL-terminated, NUL-padded)
//! 86      2     padding   (zero)
//! 88      4     quantity  (i32)
//! 92      50    supplier  (NUL-terminated, NUL-padded)
//! 142     2     padding   (zero)
//! 144     4     price     (f32, IEEE-754 bits)
//! ```
//!
//! This is the in-memory layout of the equivalent C struct on a
//! little-endian 64-bit target, written out field by field so that files
//! dumped straight from such a struct stay readable.

use crate::common::config::{CATEGORY_CAPACITY, NAME_CAPACITY, RECORD_SIZE, SUPPLIER_CAPACITY};
use crate::common::ProductId;

use super::product::Product;

/// One encoded record.
pub type RecordBytes = [u8; RECORD_SIZE];

pub const OFFSET_NAME: usize = 0;
pub const OFFSET_ID: usize = 52;
pub const OFFSET_CATEGORY: usize = 56;
pub const OFFSET_QUANTITY: usize = 88;
pub const OFFSET_SUPPLIER: usize = 92;
pub const OFFSET_PRICE: usize = 144;

/// Encode a product into one fixed-width block.
///
/// Text longer than its field is silently truncated to `capacity - 1`
/// bytes (on a character boundary) so a terminating NUL always fits.
/// Text after an embedded NUL is dropped. Unused bytes are zero.
pub fn encode(product: &Product) -> RecordBytes {
    let mut block = [0u8; RECORD_SIZE];

    encode_text(
        &mut block[OFFSET_NAME..OFFSET_NAME + NAME_CAPACITY],
        &product.name,
    );
    block[OFFSET_ID..OFFSET_ID + 4].copy_from_slice(&product.id.0.to_le_bytes());
    encode_text(
        &mut block[OFFSET_CATEGORY..OFFSET_CATEGORY + CATEGORY_CAPACITY],
        &product.category,
    );
    block[OFFSET_QUANTITY..OFFSET_QUANTITY + 4].copy_from_slice(&product.quantity.to_le_bytes());
    encode_text(
        &mut block[OFFSET_SUPPLIER..OFFSET_SUPPLIER + SUPPLIER_CAPACITY],
        &product.supplier,
    );
    block[OFFSET_PRICE..OFFSET_PRICE + 4].copy_from_slice(&product.price.to_bits().to_le_bytes());

    block
}

/// Decode one fixed-width block.
///
/// Padding bytes and anything after a field's first NUL are ignored.
/// Invalid UTF-8 in a text field is replaced with U+FFFD.
pub fn decode(block: &RecordBytes) -> Product {
    Product {
        name: decode_text(&block[OFFSET_NAME..OFFSET_NAME + NAME_CAPACITY]),
        id: ProductId(read_i32(block, OFFSET_ID)),
        category: decode_text(&block[OFFSET_CATEGORY..OFFSET_CATEGORY + CATEGORY_CAPACITY]),
        quantity: read_i32(block, OFFSET_QUANTITY),
        supplier: decode_text(&block[OFFSET_SUPPLIER..OFFSET_SUPPLIER + SUPPLIER_CAPACITY]),
        price: f32::from_bits(read_i32(block, OFFSET_PRICE) as u32),
    }
}

/// The prefix of `text` that survives encoding into a field of `capacity` bytes.
pub fn truncate_text(text: &str, capacity: usize) -> &str {
    let text = match text.find('\0') {
        Some(end) => &text[..end],
        None => text,
    };

    let max = capacity.saturating_sub(1);
    if text.len() <= max {
        return text;
    }

    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// The product as it reads back after a round trip through the codec.
pub fn normalize(product: &Product) -> Product {
    Product {
        name: truncate_text(&product.name, NAME_CAPACITY).to_string(),
        category: truncate_text(&product.category, CATEGORY_CAPACITY).to_string(),
        supplier: truncate_text(&product.supplier, SUPPLIER_CAPACITY).to_string(),
        ..product.clone()
    }
}

fn encode_text(field: &mut [u8], text: &str) {
    let kept = truncate_text(text, field.len());
    field[..kept.len()].copy_from_slice(kept.as_bytes());
}

fn decode_text(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

fn read_i32(block: &RecordBytes, offset: usize) -> i32 {
    i32::from_le_bytes([
        block[offset],
        block[offset + 1],
        block[offset + 2],
        block[offset + 3],
    ])
}

// ============================================================================
// TESTS
// ============================================================================
