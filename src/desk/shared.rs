//! Thread-safe handle around an [`OrderDesk`].
//!
//! # Design
//!
//! `OrderDesk` is single-threaded: mutation takes `&mut self`. To serve
//! several threads, [`SharedDesk`] puts one desk behind a
//! `parking_lot::RwLock`. Lookups and listings take the read lock and may
//! run together; every mutating call takes the write lock, so at most one
//! writer runs and no reader observes a half-finished order.
//!
//! Records are returned by value, since a guard cannot outlive the call.
//!
//! # Example
//!
//! ```
//! use order_desk::desk::SharedDesk;
//! use order_desk::types::ItemRequest;
//! use rust_decimal::Decimal;
//!
//! let desk = SharedDesk::new();
//! desk.add_product(1, "A", Decimal::new(1000, 2), 10).unwrap();
//!
//! let worker = desk.clone();
//! std::thread::spawn(move || {
//!     worker.create_order(1, "X", &[ItemRequest::new(1, 2)]).unwrap();
//! })
//! .join()
//! .unwrap();
//!
//! assert_eq!(desk.get_order(1).unwrap().total, Decimal::from(20));
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use rust_decimal::Decimal;

use crate::config::DeskConfig;
use crate::desk::{DeskSummary, OrderDesk};
use crate::error::Result;
use crate::types::{ItemRequest, Order, OrderId, Product, ProductId};

/// Cloneable, lock-guarded order desk
#[derive(Debug, Clone, Default)]
pub struct SharedDesk {
    inner: Arc<RwLock<OrderDesk>>,
}

impl SharedDesk {
    /// Wrap a fresh, empty desk
    pub fn new() -> Self {
        Self::from_desk(OrderDesk::new())
    }

    /// Wrap a fresh desk sized from `config`
    pub fn with_config(config: &DeskConfig) -> Self {
        Self::from_desk(OrderDesk::with_config(config))
    }

    /// Wrap an existing desk
    pub fn from_desk(desk: OrderDesk) -> Self {
        Self {
            inner: Arc::new(RwLock::new(desk)),
        }
    }

    /// Run `f` under the read lock
    pub fn read<R>(&self, f: impl FnOnce(&OrderDesk) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Run `f` under the write lock
    pub fn write<R>(&self, f: impl FnOnce(&mut OrderDesk) -> R) -> R {
        f(&mut *self.inner.write())
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Clone of a product (read lock)
    pub fn get_product(&self, id: ProductId) -> Option<Product> {
        self.read(|desk| desk.get_product(id).cloned())
    }

    /// All products, ascending by id (read lock)
    pub fn list_products(&self) -> Vec<Product> {
        self.read(OrderDesk::list_products)
    }

    /// Clone of an order (read lock)
    pub fn get_order(&self, id: OrderId) -> Option<Order> {
        self.read(|desk| desk.get_order(id).cloned())
    }

    /// All orders, in creation order (read lock)
    pub fn list_orders(&self) -> Vec<Order> {
        self.read(OrderDesk::list_orders)
    }

    /// Product and order counts (read lock)
    pub fn summary(&self) -> DeskSummary {
        self.read(OrderDesk::summary)
    }

    /// State root digest (read lock)
    pub fn state_root(&self) -> [u8; 32] {
        self.read(OrderDesk::state_root)
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Add a product (write lock)
    pub fn add_product(
        &self,
        id: ProductId,
        name: impl Into<String>,
        unit_price: Decimal,
        stock_quantity: u32,
    ) -> Result<Product> {
        self.write(|desk| desk.add_product(id, name, unit_price, stock_quantity).cloned())
    }

    /// Change a product's price (write lock)
    pub fn reprice_product(&self, id: ProductId, unit_price: Decimal) -> Result<Product> {
        self.write(|desk| desk.reprice_product(id, unit_price).cloned())
    }

    /// Set a product's stock (write lock)
    pub fn restock_product(&self, id: ProductId, stock_quantity: u32) -> Result<Product> {
        self.write(|desk| desk.restock_product(id, stock_quantity).cloned())
    }

    /// Validate, price and store an order (write lock)
    pub fn create_order(
        &self,
        id: OrderId,
        customer: impl Into<String>,
        requests: &[ItemRequest],
    ) -> Result<Order> {
        self.write(|desk| desk.create_order(id, customer, requests).cloned())
    }

    /// Update an order's customer and/or lines (write lock)
    pub fn update_order(
        &self,
        id: OrderId,
        customer: Option<String>,
        requests: Option<&[ItemRequest]>,
    ) -> Result<Order> {
        self.write(|desk| desk.update_order(id, customer, requests).cloned())
    }

    /// Remove an order (write lock)
    pub fn delete_order(&self, id: OrderId) -> Option<Order> {
        self.write(|desk| desk.delete_order(id))
    }
}
