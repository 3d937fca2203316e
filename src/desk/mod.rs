//! Order desk: the service that joins the catalog and the ledger.
//!
//! ## Order Assembly Rules
//!
//! When an order is created, for each requested line:
//!
//! 1. The product must exist in the catalog (`ProductNotFound`)
//! 2. The quantity must be greater than zero (`InvalidQuantity`)
//! 3. Stock must cover the quantity (`InsufficientStock`); stock is **not** decremented
//! 4. The line is priced with the product's current unit price
//!
//! Only after every line passes is the order appended to the ledger, so a
//! failure anywhere leaves the ledger untouched. A colliding order id
//! surfaces as `DuplicateKey` from the ledger.
//!
//! Updates re-resolve and re-price replacement lines against the current
//! catalog but do not check stock.
//!
//! ## Components
//!
//! - [`OrderDesk`]: single-threaded service owning one catalog and one ledger
//! - [`SharedDesk`]: `Arc<RwLock<OrderDesk>>` handle for multi-threaded callers
//!
//! ## Example
//!
//! ```
//! use order_desk::desk::OrderDesk;
//! use order_desk::types::ItemRequest;
//! use rust_decimal::Decimal;
//!
//! let mut desk = OrderDesk::new();
//! desk.add_product(1, "A", Decimal::new(1000, 2), 100).unwrap();
//!
//! let order = desk.create_order(500, "X", &[ItemRequest::new(1, 3)]).unwrap();
//! assert_eq!(order.total, Decimal::from(30));
//!
//! // Repricing the product does not touch the stored order
//! desk.reprice_product(1, Decimal::from(12)).unwrap();
//! assert_eq!(desk.get_order(500).unwrap().total, Decimal::from(30));
//! ```

pub mod assembly;
pub mod shared;
mod state;

pub use assembly::{DeskSummary, OrderDesk};
pub use shared::SharedDesk;
