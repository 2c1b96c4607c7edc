//! Integration tests for the record store and CSV export.
//!
//! These tests verify on-disk behavior across store instances.

use std::fs::OpenOptions;
use std::io::Write;

use stockfile::report::{export_csv, ExportOutcome};
use stockfile::storage::record::codec;
use stockfile::{Error, Product, ProductId, RecordStore, ShortReadPolicy, StoreConfig, RECORD_SIZE};
use tempfile::tempdir;

fn create_store() -> (RecordStore, tempfile::TempDir) {
    let dir = tempdir().unwrap();
    let store = RecordStore::at(dir.path().join("inventory.dat"));
    (store, dir)
}

fn product(id: i32, quantity: i32) -> Product {
    Product::new(id, format!("Item {}", id), "Parts", quantity, id as f32 * 1.5, "Supplier Co")
}

/// Appending N products and scanning yields them in append order.
#[test]
fn test_append_then_scan() {
    let (store, _dir) = create_store();
    let originals: Vec<Product> = (0..25).map(|i| product(i, i * 3)).collect();

    for p in &originals {
        store.append(p).unwrap();
    }

    let scanned: Vec<Product> = store.scan().unwrap().map(|p| p.unwrap()).collect();
    assert_eq!(scanned, originals);
    assert_eq!(store.record_count().unwrap(), 25);
}

/// File size alone determines the record count.
#[test]
fn test_file_is_headerless_sequence_of_records() {
    let (store, _dir) = create_store();
    for i in 0..3 {
        store.append(&product(i, 1)).unwrap();
    }

    let bytes = std::fs::read(store.path()).unwrap();
    assert_eq!(bytes.len(), 3 * RECORD_SIZE);

    for (i, chunk) in bytes.chunks(RECORD_SIZE).enumerate() {
        let block: &[u8; RECORD_SIZE] = chunk.try_into().unwrap();
        assert_eq!(codec::decode(block).id, ProductId::new(i as i32));
    }
}

/// Records written by one store instance are read by another.
#[test]
fn test_persistence_across_instances() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.dat");

    {
        let store = RecordStore::at(&path);
        store.append(&product(10, 4)).unwrap();
    }

    {
        let store = RecordStore::at(&path);
        let found = store.find_by_id(ProductId::new(10)).unwrap().unwrap();
        assert_eq!(found, product(10, 4));
    }
}

/// A file laid out like the C struct, stale bytes after terminators included.
#[test]
fn test_reads_c_struct_layout() {
    let (store, _dir) = create_store();

    let mut block = [0xCCu8; RECORD_SIZE]; // uninitialized stack garbage
    block[0..7].copy_from_slice(b"Hammer\0");
    block[52..56].copy_from_slice(&17i32.to_le_bytes());
    block[56..62].copy_from_slice(b"Tools\0");
    block[88..92].copy_from_slice(&3i32.to_le_bytes());
    block[92..98].copy_from_slice(b"Bosch\0");
    block[144..148].copy_from_slice(&12.5f32.to_le_bytes());
    std::fs::write(store.path(), block).unwrap();

    let p = store.find_by_id(ProductId::new(17)).unwrap().unwrap();
    assert_eq!(p.name, "Hammer");
    assert_eq!(p.category, "Tools");
    assert_eq!(p.quantity, 3);
    assert_eq!(p.supplier, "Bosch");
    assert_eq!(p.price, 12.5);
}

/// A partial trailing record is an error by default and ignorable on request.
#[test]
fn test_short_read_policies() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.dat");
    let strict = RecordStore::at(&path);
    strict.append(&product(1, 1)).unwrap();
    strict.append(&product(2, 2)).unwrap();

    let mut file = OpenOptions::new().append(true).open(&path).unwrap();
    file.write_all(&[1u8; RECORD_SIZE - 1]).unwrap();
    drop(file);

    let results: Vec<_> = strict.scan().unwrap().collect();
    assert_eq!(results.len(), 3);
    assert!(matches!(
        results[2],
        Err(Error::TruncatedRecord {
            found,
            ..
        }) if found == RECORD_SIZE - 1
    ));

    let lenient = RecordStore::new(&StoreConfig::new(&path).with_short_read(ShortReadPolicy::Lenient));
    let products: Vec<Product> = lenient.scan().unwrap().map(|p| p.unwrap()).collect();
    assert_eq!(products.len(), 2);

    // Lookups before the damaged tail still succeed in strict mode.
    assert!(strict.find_by_id(ProductId::new(1)).unwrap().is_some());
    assert!(strict.find_by_id(ProductId::new(99)).is_err());
}

/// A name with a quote is exported with the quote doubled.
#[test]
fn test_csv_export_escaping() {
    let (store, dir) = create_store();
    store
        .append(&Product::new(1, "Bob\"s Widget", "Tools, misc", 3, 4.0, "\"Q\" Ltd"))
        .unwrap();
    store
        .append(&Product::new(2, "Plain", "Parts", 12, 0.5, "Acme"))
        .unwrap();

    let target = dir.path().join("inventory.csv");
    assert_eq!(
        export_csv(&store, &target).unwrap(),
        ExportOutcome::Exported { rows: 2 }
    );

    let text = std::fs::read_to_string(&target).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "ID,Name,Category,Quantity,Price,Supplier");
    assert_eq!(
        lines[1],
        "1,\"Bob\"\"s Widget\",\"Tools, misc\",3,4.00,\"\"\"Q\"\" Ltd\""
    );
    assert_eq!(lines[2], "2,\"Plain\",\"Parts\",12,0.50,\"Acme\"");
}

/// Export overwrites an existing file in place.
#[test]
fn test_csv_export_replaces_previous_file() {
    let (store, dir) = create_store();
    store.append(&product(1, 1)).unwrap();
    let target = dir.path().join("inventory.csv");
    std::fs::write(&target, "stale contents that are much longer than the export\n".repeat(10)).unwrap();

    export_csv(&store, &target).unwrap();

    let text = std::fs::read_to_string(&target).unwrap();
    assert!(!text.contains("stale"));
    assert_eq!(text.lines().count(), 2);
}
