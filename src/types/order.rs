//! Order types for the ledger.
//!
//! ## Price Snapshots
//!
//! A [`LineItem`] copies the catalog's unit price at the moment it is built.
//! Once embedded in an [`Order`] it is never re-read from the catalog, so a
//! later reprice does not move the stored subtotal or total.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DeskError, Result};
use crate::types::price;
use crate::types::{Product, ProductId};

/// Order identifier (ledger key)
pub type OrderId = u64;

// ============================================================================
// ItemRequest
// ============================================================================

/// An unpriced line submitted by a caller: which product and how many.
///
/// JSON bodies arrive as `api::ItemCreate` and convert into this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl ItemRequest {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self { product_id, quantity }
    }
}

// ============================================================================
// LineItem
// ============================================================================

/// A priced line inside an order.
///
/// `subtotal` is always `quantity * unit_price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product this line refers to (checked at creation, not afterwards)
    pub product_id: ProductId,

    /// Units ordered
    pub quantity: u32,

    /// Unit price copied from the catalog
    pub unit_price: Decimal,

    /// `quantity * unit_price`
    pub subtotal: Decimal,
}

impl LineItem {
    /// Build a line item with an explicit unit price
    ///
    /// Fails with [`DeskError::SubtotalOverflow`] if the subtotal does not fit.
    pub fn new(product_id: ProductId, quantity: u32, unit_price: Decimal) -> Result<Self> {
        let subtotal = price::checked_subtotal(unit_price, quantity)
            .ok_or(DeskError::SubtotalOverflow { product_id })?;

        Ok(Self {
            product_id,
            quantity,
            unit_price,
            subtotal,
        })
    }

    /// Build a line item from the product's current price
    ///
    /// # Example
    ///
    /// ```
    /// use order_desk::types::{LineItem, Product};
    /// use rust_decimal::Decimal;
    ///
    /// let product = Product::new(1, "A", Decimal::new(1000, 2), 100);
    /// let item = LineItem::snapshot(&product, 3).unwrap();
    /// assert_eq!(item.subtotal, Decimal::new(3000, 2));
    /// ```
    pub fn snapshot(product: &Product, quantity: u32) -> Result<Self> {
        Self::new(product.id, quantity, product.unit_price)
    }
}

// ============================================================================
// Order
// ============================================================================

/// An order held by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier
    pub id: OrderId,

    /// Customer name
    pub customer: String,

    /// Set once when the order enters the ledger
    pub created_at: DateTime<Utc>,

    /// Priced lines, in request order
    pub items: Vec<LineItem>,

    /// Sum of item subtotals
    pub total: Decimal,
}

impl Order {
    /// Create an order and compute its total
    ///
    /// Fails with [`DeskError::TotalOverflow`] if the subtotals do not sum.
    pub fn new(
        id: OrderId,
        customer: impl Into<String>,
        items: Vec<LineItem>,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        let total = Self::total_of(&items).ok_or(DeskError::TotalOverflow { order_id: id })?;

        Ok(Self {
            id,
            customer: customer.into(),
            created_at,
            items,
            total,
        })
    }

    /// Sum the subtotals of `items`, `None` on overflow
    pub fn total_of(items: &[LineItem]) -> Option<Decimal> {
        price::checked_total(items.iter().map(|item| item.subtotal))
    }

    /// Number of lines in the order
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn epoch() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_line_item_subtotal() {
        let item = LineItem::new(1, 3, Decimal::new(1000, 2)).unwrap();

        assert_eq!(item.product_id, 1);
        assert_eq!(item.quantity, 3);
        assert_eq!(item.unit_price, Decimal::new(1000, 2));
        assert_eq!(item.subtotal, Decimal::from(30));
    }

    #[test]
    fn test_line_item_overflow() {
        let err = LineItem::new(9, 2, Decimal::MAX).unwrap_err();
        assert_eq!(err, DeskError::SubtotalOverflow { product_id: 9 });
    }

    #[test]
    fn test_snapshot_copies_price() {
        let mut product = Product::new(4, "Cable", Decimal::new(500, 2), 10);
        let item = LineItem::snapshot(&product, 2).unwrap();

        product.unit_price = Decimal::new(900, 2);

        assert_eq!(item.unit_price, Decimal::new(500, 2));
        assert_eq!(item.subtotal, Decimal::from(10));
    }

    #[test]
    fn test_order_total() {
        let items = vec![
            LineItem::new(1, 2, Decimal::new(1000, 2)).unwrap(),
            LineItem::new(2, 1, Decimal::new(550, 2)).unwrap(),
        ];
        let order = Order::new(500, "X", items, epoch()).unwrap();

        assert_eq!(order.id, 500);
        assert_eq!(order.customer, "X");
        assert_eq!(order.created_at, epoch());
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.total, Decimal::new(2550, 2));
    }

    #[test]
    fn test_empty_order_total_is_zero() {
        let order = Order::new(1, "X", Vec::new(), epoch()).unwrap();
        assert_eq!(order.total, Decimal::ZERO);
    }

    #[test]
    fn test_order_total_overflow() {
        let items = vec![
            LineItem::new(1, 1, Decimal::MAX).unwrap(),
            LineItem::new(2, 1, Decimal::MAX).unwrap(),
        ];
        let err = Order::new(77, "X", items, epoch()).unwrap_err();
        assert_eq!(err, DeskError::TotalOverflow { order_id: 77 });
    }
}
