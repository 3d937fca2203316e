//! Order assembly: validates requested lines against the catalog, prices
//! them, and stores the result in the ledger.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::catalog::ProductCatalog;
use crate::config::DeskConfig;
use crate::desk::state;
use crate::error::{DeskError, Result};
use crate::ledger::OrderLedger;
use crate::types::{ItemRequest, LineItem, Order, OrderId, Product, ProductId};

/// Whether line resolution enforces stock levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StockCheck {
    Enforce,
    Skip,
}

/// Container sizes, as reported by [`OrderDesk::summary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeskSummary {
    pub products: usize,
    pub orders: usize,
}

/// The order desk: one catalog, one ledger, and the rules that join them.
///
/// Each desk is an independent, explicitly constructed instance; tests
/// build a fresh one per case.
#[derive(Debug, Clone, Default)]
pub struct OrderDesk {
    catalog: ProductCatalog,
    ledger: OrderLedger,
}

impl OrderDesk {
    /// Create an empty desk
    pub fn new() -> Self {
        Self {
            catalog: ProductCatalog::new(),
            ledger: OrderLedger::new(),
        }
    }

    /// Create an empty desk with arenas sized from `config`
    pub fn with_config(config: &DeskConfig) -> Self {
        Self {
            catalog: ProductCatalog::with_capacity(config.catalog_capacity()),
            ledger: OrderLedger::with_capacity(config.ledger_capacity()),
        }
    }

    /// Read access to the catalog
    #[inline]
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Read access to the ledger
    #[inline]
    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    /// Product and order counts
    pub fn summary(&self) -> DeskSummary {
        DeskSummary {
            products: self.catalog.len(),
            orders: self.ledger.len(),
        }
    }

    // ========================================================================
    // Products
    // ========================================================================

    /// Add a product to the catalog
    pub fn add_product(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        unit_price: Decimal,
        stock_quantity: u32,
    ) -> Result<&Product> {
        self.catalog.insert(id, name, unit_price, stock_quantity)
    }

    /// Look up a product
    pub fn get_product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.lookup(id)
    }

    /// All products, ascending by id
    pub fn list_products(&self) -> Vec<Product> {
        self.catalog.list_all()
    }

    /// Change a product's price; existing orders keep their snapshot
    pub fn reprice_product(&mut self, id: ProductId, unit_price: Decimal) -> Result<&Product> {
        self.catalog
            .reprice(id, unit_price)?
            .ok_or(DeskError::ProductNotFound(id))
    }

    /// Set a product's stock level
    pub fn restock_product(&mut self, id: ProductId, stock_quantity: u32) -> Result<&Product> {
        self.catalog
            .restock(id, stock_quantity)
            .ok_or(DeskError::ProductNotFound(id))
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Create an order stamped with the current time
    ///
    /// # Example
    ///
    /// ```
    /// use order_desk::desk::OrderDesk;
    /// use order_desk::error::DeskError;
    /// use order_desk::types::ItemRequest;
    /// use rust_decimal::Decimal;
    ///
    /// let mut desk = OrderDesk::new();
    /// desk.add_product(1, "A", Decimal::new(1000, 2), 100).unwrap();
    /// desk.add_product(2, "B", Decimal::new(500, 2), 1).unwrap();
    ///
    /// let requests = [ItemRequest::new(1, 2), ItemRequest::new(2, 2)];
    /// let err = desk.create_order(500, "X", &requests).unwrap_err();
    ///
    /// assert_eq!(err, DeskError::InsufficientStock { product_id: 2, requested: 2, available: 1 });
    /// assert!(desk.get_order(500).is_none());
    /// ```
    pub fn create_order(
        &mut self,
        id: OrderId,
        customer: impl Into<String>,
        requests: &[ItemRequest],
    ) -> Result<&Order> {
        self.create_order_at(id, customer, requests, Utc::now())
    }

    /// Create an order with an explicit creation time
    ///
    /// Every line is resolved and priced before the ledger is touched, so a
    /// failure on any line leaves no trace of the order. Stock is checked
    /// but not decremented.
    pub fn create_order_at(
        &mut self,
        id: OrderId,
        customer: impl Into<String>,
        requests: &[ItemRequest],
        created_at: DateTime<Utc>,
    ) -> Result<&Order> {
        debug!(order_id = id, ?requests, "create_order called");

        let items = self.price_lines(requests, StockCheck::Enforce).map_err(|err| {
            warn!(order_id = id, %err, "Order rejected");
            err
        })?;

        let order = self.ledger.append_at(id, customer, items, created_at)?;
        info!(order_id = order.id, total = %order.total, lines = order.item_count(), "Created order");
        Ok(order)
    }

    /// Look up an order
    pub fn get_order(&self, id: OrderId) -> Option<&Order> {
        self.ledger.find(id)
    }

    /// All orders, in creation order
    pub fn list_orders(&self) -> Vec<Order> {
        self.ledger.list_all()
    }

    /// Update an order's customer and/or lines
    ///
    /// New lines are re-resolved and re-priced against the current catalog,
    /// so the total reflects today's prices. Stock is not checked here.
    pub fn update_order(
        &mut self,
        id: OrderId,
        customer: Option<String>,
        requests: Option<&[ItemRequest]>,
    ) -> Result<&Order> {
        debug!(order_id = id, ?customer, ?requests, "update_order called");

        if !self.ledger.contains(id) {
            warn!(order_id = id, "Update for unknown order");
            return Err(DeskError::OrderNotFound(id));
        }

        let items = match requests {
            Some(requests) => Some(self.price_lines(requests, StockCheck::Skip)?),
            None => None,
        };

        let order = self
            .ledger
            .update(id, customer, items)?
            .ok_or(DeskError::OrderNotFound(id))?;
        info!(order_id = id, total = %order.total, "Updated order");
        Ok(order)
    }

    /// Remove an order, returning it if it existed
    pub fn delete_order(&mut self, id: OrderId) -> Option<Order> {
        let removed = self.ledger.remove(id);
        match &removed {
            Some(_) => info!(order_id = id, "Deleted order"),
            None => debug!(order_id = id, "Delete for unknown order"),
        }
        removed
    }

    // ========================================================================
    // State Root
    // ========================================================================

    /// SHA-256 digest of the catalog and ledger contents
    ///
    /// Two desks holding the same records in the same order produce the
    /// same root.
    pub fn state_root(&self) -> [u8; 32] {
        state::compute_state_root(&self.catalog, &self.ledger)
    }

    /// State root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root())
    }

    // ========================================================================
    // Line Resolution
    // ========================================================================

    /// Resolve and price each request against the catalog
    fn price_lines(&self, requests: &[ItemRequest], stock: StockCheck) -> Result<Vec<LineItem>> {
        requests
            .iter()
            .map(|request| {
                let product = self
                    .catalog
                    .lookup(request.product_id)
                    .ok_or(DeskError::ProductNotFound(request.product_id))?;

                if request.quantity == 0 {
                    return Err(DeskError::InvalidQuantity {
                        product_id: request.product_id,
                    });
                }
                if stock == StockCheck::Enforce && !product.has_stock_for(request.quantity) {
                    return Err(DeskError::InsufficientStock {
                        product_id: product.id,
                        requested: request.quantity,
                        available: product.stock_quantity,
                    });
                }

                LineItem::snapshot(product, request.quantity)
            })
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn price(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    fn seeded_desk() -> OrderDesk {
        let mut desk = OrderDesk::new();
        desk.add_product(1, "A", price(1000), 100).unwrap();
        desk.add_product(2, "B", price(500), 1).unwrap();
        desk
    }

    #[test]
    fn test_create_order_prices_lines() {
        let mut desk = seeded_desk();

        let order = desk
            .create_order(10, "X", &[ItemRequest::new(1, 3), ItemRequest::new(2, 1)])
            .unwrap();

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].subtotal, price(3000));
        assert_eq!(order.items[1].subtotal, price(500));
        assert_eq!(order.total, price(3500));
        assert_eq!(desk.summary(), DeskSummary { products: 2, orders: 1 });
    }

    #[test]
    fn test_create_order_missing_product() {
        let mut desk = seeded_desk();

        let err = desk
            .create_order(10, "X", &[ItemRequest::new(1, 1), ItemRequest::new(99, 1)])
            .unwrap_err();

        assert_eq!(err, DeskError::ProductNotFound(99));
        assert!(desk.get_order(10).is_none());
        assert!(desk.ledger().is_empty());
    }

    #[test]
    fn test_create_order_zero_quantity() {
        let mut desk = seeded_desk();

        let err = desk.create_order(10, "X", &[ItemRequest::new(1, 0)]).unwrap_err();
        assert_eq!(err, DeskError::InvalidQuantity { product_id: 1 });
        assert!(desk.ledger().is_empty());
    }

    #[test]
    fn test_create_order_does_not_decrement_stock() {
        let mut desk = seeded_desk();

        desk.create_order(10, "X", &[ItemRequest::new(2, 1)]).unwrap();
        desk.create_order(11, "Y", &[ItemRequest::new(2, 1)]).unwrap();

        assert_eq!(desk.get_product(2).unwrap().stock_quantity, 1);
    }

    #[test]
    fn test_create_order_duplicate_id() {
        let mut desk = seeded_desk();
        desk.create_order(10, "X", &[ItemRequest::new(1, 1)]).unwrap();

        let err = desk.create_order(10, "Y", &[ItemRequest::new(1, 2)]).unwrap_err();
        assert_eq!(err, DeskError::DuplicateKey(10));
        assert_eq!(desk.get_order(10).unwrap().customer, "X");
    }

    #[test]
    fn test_missing_product_reported_before_duplicate_id() {
        let mut desk = seeded_desk();
        desk.create_order(10, "X", &[ItemRequest::new(1, 1)]).unwrap();

        let err = desk.create_order(10, "Y", &[ItemRequest::new(42, 1)]).unwrap_err();
        assert_eq!(err, DeskError::ProductNotFound(42));
    }

    #[test]
    fn test_update_order_reprices_from_catalog() {
        let mut desk = seeded_desk();
        desk.create_order(10, "X", &[ItemRequest::new(1, 1)]).unwrap();
        desk.reprice_product(1, price(1200)).unwrap();

        let order = desk
            .update_order(10, None, Some([ItemRequest::new(1, 2)].as_slice()))
            .unwrap();

        assert_eq!(order.items[0].unit_price, price(1200));
        assert_eq!(order.total, price(2400));
        assert_eq!(order.customer, "X");
    }

    #[test]
    fn test_update_order_skips_stock_check() {
        let mut desk = seeded_desk();
        desk.create_order(10, "X", &[ItemRequest::new(2, 1)]).unwrap();

        let order = desk
            .update_order(10, None, Some([ItemRequest::new(2, 50)].as_slice()))
            .unwrap();
        assert_eq!(order.total, price(25000));
    }

    #[test]
    fn test_update_order_errors() {
        let mut desk = seeded_desk();
        desk.create_order(10, "X", &[ItemRequest::new(1, 1)]).unwrap();

        assert_eq!(
            desk.update_order(11, Some("Y".into()), None).unwrap_err(),
            DeskError::OrderNotFound(11)
        );
        assert_eq!(
            desk.update_order(10, Some("Y".into()), Some([ItemRequest::new(7, 1)].as_slice()))
                .unwrap_err(),
            DeskError::ProductNotFound(7)
        );
        // Failed update leaves the customer untouched
        assert_eq!(desk.get_order(10).unwrap().customer, "X");
    }

    #[test]
    fn test_update_order_zero_quantity() {
        let mut desk = seeded_desk();
        desk.create_order(10, "X", &[ItemRequest::new(1, 2)]).unwrap();
        let before = desk.get_order(10).unwrap().clone();

        let err = desk
            .update_order(10, Some("Y".into()), Some([ItemRequest::new(1, 0)].as_slice()))
            .unwrap_err();

        assert_eq!(err, DeskError::InvalidQuantity { product_id: 1 });
        let after = desk.get_order(10).unwrap();
        assert_eq!(after.customer, "X");
        assert_eq!(after.items, before.items);
        assert_eq!(after.total, price(2000));
    }

    #[test]
    fn test_delete_order() {
        let mut desk = seeded_desk();
        desk.create_order(10, "X", &[ItemRequest::new(1, 1)]).unwrap();

        assert_eq!(desk.delete_order(10).map(|o| o.id), Some(10));
        assert!(desk.delete_order(10).is_none());
        assert!(desk.list_orders().is_empty());
    }

    #[test]
    fn test_reprice_and_restock_missing_product() {
        let mut desk = seeded_desk();

        assert_eq!(
            desk.reprice_product(9, price(1)).unwrap_err(),
            DeskError::ProductNotFound(9)
        );
        assert_eq!(
            desk.restock_product(9, 1).unwrap_err(),
            DeskError::ProductNotFound(9)
        );
        assert_eq!(desk.restock_product(2, 40).unwrap().stock_quantity, 40);
    }

    #[test]
    fn test_with_config() {
        let config = DeskConfig::new()
            .with_catalog_capacity(256)
            .with_ledger_capacity(512);
        let desk = OrderDesk::with_config(&config);

        assert!(desk.catalog().capacity() >= 256);
        assert!(desk.ledger().capacity() >= 512);
    }

    #[test]
    fn test_state_root_hex() {
        let desk = seeded_desk();
        let hex_root = desk.state_root_hex();

        assert_eq!(hex_root.len(), 64);
        assert_eq!(hex_root, hex::encode(desk.state_root()));
    }
}
