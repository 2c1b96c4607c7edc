//! Product identifier type.

use std::fmt;

/// Identifies a product in the store.
///
/// Ids are supplied by the user and stored as a signed 32-bit integer.
/// Nothing enforces uniqueness: two records may share an id, and lookups
/// act on the first one in file order.
///
/// # Example
/// ```
/// use stockfile::ProductId;
///
/// let id = ProductId::new(42);
/// assert_eq!(id.0, 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub i32);

impl ProductId {
    /// Create a new ProductId.
    #[inline]
    pub fn new(id: i32) -> Self {
        ProductId(id)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        ProductId(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_new() {
        let id = ProductId::new(-7);
        assert_eq!(id.0, -7);
        assert_eq!(ProductId::from(-7), id);
    }

    #[test]
    fn test_product_id_ordering() {
        assert!(ProductId::new(1) < ProductId::new(2));
        assert!(ProductId::new(-5) < ProductId::new(3));
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(format!("{}", ProductId::new(42)), "42");
        assert_eq!(format!("{}", ProductId::new(-1)), "-1");
    }
}
