//! # Order Desk
//!
//! In-memory product catalog and order ledger with order pricing.
//!
//! ## Architecture
//!
//! - **Types**: Product, ItemRequest, LineItem, Order
//! - **Catalog**: Unbalanced binary search tree of products, slab-backed
//! - **Ledger**: Singly linked list of orders, slab-backed
//! - **Desk**: Order assembly (validate, price, store) over both containers
//! - **Api**: JSON payloads and status codes for an HTTP layer
//!
//! ## Design Principles
//!
//! 1. **Arena + handles**: Tree and list links are slab keys, not pointers
//! 2. **Exact money**: Prices and totals are `rust_decimal::Decimal`
//! 3. **Validate, then mutate**: Every error is raised before any container changes
//! 4. **No globals**: Each desk is constructed explicitly and owns its state
//!
//! ## Example
//!
//! ```
//! use order_desk::{ItemRequest, OrderDesk};
//! use rust_decimal::Decimal;
//!
//! let mut desk = OrderDesk::new();
//! desk.add_product(2, "B", Decimal::new(500, 2), 10).unwrap();
//! desk.add_product(1, "A", Decimal::new(1000, 2), 10).unwrap();
//!
//! let ids: Vec<u64> = desk.list_products().iter().map(|p| p.id).collect();
//! assert_eq!(ids, vec![1, 2]);
//!
//! let order = desk
//!     .create_order(1, "X", &[ItemRequest::new(1, 1), ItemRequest::new(2, 2)])
//!     .unwrap();
//! assert_eq!(order.total, Decimal::from(20));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core record types: Product, LineItem, Order
pub mod types;

/// Error kinds shared by every component
pub mod error;

/// Product catalog: BST with slab-based storage
pub mod catalog;

/// Order ledger: linked list with slab-based storage
pub mod ledger;

/// Order assembly service
pub mod desk;

/// JSON boundary for an HTTP layer
pub mod api;

/// Capacities and log filter
pub mod config;

/// Tracing subscriber setup
pub mod logging;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use catalog::{ProductCatalog, ProductNode};
pub use config::DeskConfig;
pub use desk::{DeskSummary, OrderDesk, SharedDesk};
pub use error::{DeskError, Result};
pub use ledger::{OrderLedger, OrderNode};
pub use types::{ItemRequest, LineItem, Order, OrderId, Product, ProductId};
