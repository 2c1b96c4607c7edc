//! Linear-scan filters over the store.

use crate::common::Result;
use crate::storage::record::Product;
use crate::storage::RecordStore;

/// Products selected by a filter, or the absence of any store file.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// There is no store file at all.
    NoInventory,
    /// Matching products in file order. May be empty.
    Products(Vec<Product>),
}

impl Listing {
    /// The matching products; empty for [`Listing::NoInventory`].
    pub fn products(&self) -> &[Product] {
        match self {
            Listing::NoInventory => &[],
            Listing::Products(products) => products,
        }
    }
}

/// Every product for which `predicate` holds, in file order.
pub fn filter<P>(store: &RecordStore, mut predicate: P) -> Result<Listing>
where
    P: FnMut(&Product) -> bool,
{
    let Some(scan) = store.try_scan()? else {
        return Ok(Listing::NoInventory);
    };

    let mut matches = Vec::new();
    for product in scan {
        let product = product?;
        if predicate(&product) {
            matches.push(product);
        }
    }
    Ok(Listing::Products(matches))
}

/// Every product in file order.
pub fn all(store: &RecordStore) -> Result<Listing> {
    filter(store, |_| true)
}

/// Products with quantity below the low-stock threshold.
pub fn low_stock(store: &RecordStore) -> Result<Listing> {
    filter(store, Product::is_low_stock)
}
