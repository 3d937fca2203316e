//! Product record stored in the catalog tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier (catalog key)
pub type ProductId = u64;

/// A product in the catalog.
///
/// ## Fields
///
/// `stock_quantity` is informational: orders are validated against it but
/// never decrement it.
///
/// ## Example
///
/// ```
/// use order_desk::types::Product;
/// use rust_decimal::Decimal;
///
/// let laptop = Product::new(101, "Laptop HP", Decimal::new(59999, 2), 15);
/// assert!(laptop.has_stock_for(15));
/// assert!(!laptop.has_stock_for(16));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Current unit price (never negative)
    pub unit_price: Decimal,

    /// Units on hand
    pub stock_quantity: u32,
}

impl Product {
    /// Create a new product record
    pub fn new(id: ProductId, name: impl Into<String>, unit_price: Decimal, stock_quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            stock_quantity,
        }
    }

    /// Check whether `quantity` units can be supplied from current stock
    #[inline]
    pub fn has_stock_for(&self, quantity: u32) -> bool {
        self.stock_quantity >= quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new() {
        let product = Product::new(7, String::from("Mouse"), Decimal::new(1250, 2), 3);

        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Mouse");
        assert_eq!(product.unit_price, Decimal::new(1250, 2));
        assert_eq!(product.stock_quantity, 3);
    }

    #[test]
    fn test_has_stock_for() {
        let product = Product::new(1, "A", Decimal::ONE, 2);

        assert!(product.has_stock_for(0));
        assert!(product.has_stock_for(2));
        assert!(!product.has_stock_for(5));
    }

    #[test]
    fn test_empty_stock() {
        let product = Product::new(1, "A", Decimal::ONE, 0);
        assert!(!product.has_stock_for(1));
    }
}
