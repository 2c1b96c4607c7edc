//! Product - the single entity kept in the record store.

use crate::common::config::LOW_STOCK_THRESHOLD;
use crate::common::ProductId;

/// One inventory item.
///
/// Text fields are held as ordinary `String`s in memory; the fixed-width
/// truncation only happens when the product is encoded (see
/// [`codec`](super::codec)). Neither `quantity` nor `price` is range
/// checked: negative stock and negative prices are stored as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    pub name: String,
    pub id: ProductId,
    pub category: String,
    pub quantity: i32,
    pub supplier: String,
    pub price: f32,
}

impl Product {
    /// Create a product from its field values.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i32,
        price: f32,
        supplier: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            category: category.into(),
            quantity,
            supplier: supplier.into(),
            price,
        }
    }

    /// Whether the quantity is below [`LOW_STOCK_THRESHOLD`].
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

/// Replacement values for an edit.
///
/// `None` keeps the current value. The id is never changed by an edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f32>,
    pub supplier: Option<String>,
}

impl ProductUpdate {
    /// An update that replaces every editable field with `product`'s values.
    pub fn replace_all(product: &Product) -> Self {
        Self {
            name: Some(product.name.clone()),
            category: Some(product.category.clone()),
            quantity: Some(product.quantity),
            price: Some(product.price),
            supplier: Some(product.supplier.clone()),
        }
    }

    /// Produce the replacement record for `current`.
    pub fn apply(&self, current: &Product) -> Product {
        Product {
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            id: current.id,
            category: self
                .category
                .clone()
                .unwrap_or_else(|| current.category.clone()),
            quantity: self.quantity.unwrap_or(current.quantity),
            supplier: self
                .supplier
                .clone()
                .unwrap_or_else(|| current.supplier.clone()),
            price: self.price.unwrap_or(current.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product::new(7, "Widget", "Hardware", 12, 2.5, "Acme")
    }

    #[test]
    fn test_low_stock_boundary() {
        let mut p = widget();
        p.quantity = 9;
        assert!(p.is_low_stock());
        p.quantity = 10;
        assert!(!p.is_low_stock());
        p.quantity = -3;
        assert!(p.is_low_stock());
    }

    #[test]
    fn test_update_keeps_unset_fields() {
        let update = ProductUpdate {
            quantity: Some(3),
            ..ProductUpdate::default()
        };
        let updated = update.apply(&widget());

        assert_eq!(updated.quantity, 3);
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.supplier, "Acme");
        assert_eq!(updated.price, 2.5);
    }

    #[test]
    fn test_update_never_changes_id() {
        let other = Product::new(99, "Gadget", "Toys", 1, 1.0, "Initech");
        let updated = ProductUpdate::replace_all(&other).apply(&widget());

        assert_eq!(updated.id, ProductId::new(7));
        assert_eq!(updated.name, "Gadget");
        assert_eq!(updated.category, "Toys");
    }
}
