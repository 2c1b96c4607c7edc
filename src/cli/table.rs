//! Plain-text rendering of products.

use crate::storage::record::Product;

pub fn inventory_header() -> String {
    format!(
        "{:<5} {:<20} {:<15} {:<10} {:<10} {:<20}\n{}",
        "ID",
        "Name",
        "Category",
        "Quantity",
        "Price",
        "Supplier",
        "-".repeat(79)
    )
}

pub fn inventory_row(p: &Product) -> String {
    format!(
        "{:<5} {:<20.20} {:<15.15} {:<10} {:<10.2} {:<20.20}",
        p.id.0, p.name, p.category, p.quantity, p.price, p.supplier
    )
}

pub fn low_stock_header() -> String {
    format!(
        "{:<20} {:<15} {:<10} {:<10} {:<20}\n{}",
        "Name",
        "Category",
        "Quantity",
        "Price",
        "Supplier",
        "-".repeat(67)
    )
}

// Low-stock rows leave out the id.
pub fn low_stock_row(p: &Product) -> String {
    format!(
        "{:<20.20} {:<15.15} {:<10} {:<10.2} {:<20.20}",
        p.name, p.category, p.quantity, p.price, p.supplier
    )
}

pub fn details(p: &Product) -> String {
    format!(
        "ID: {}\nName: {}\nCategory: {}\nQuantity: {}\nPrice: {:.2}\nSupplier: {}",
        p.id, p.name, p.category, p.quantity, p.price, p.supplier
    )
}
