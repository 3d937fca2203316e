//! Core record types for the order desk
//!
//! ## Types
//!
//! - [`Product`]: A catalog entry (id, name, unit price, stock)
//! - [`ItemRequest`]: An unpriced `{product_id, quantity}` pair from a caller
//! - [`LineItem`]: A priced line with a frozen unit price
//! - [`Order`]: A customer order with its line items and total
//!
//! ## Decimal Arithmetic
//!
//! All money values are `rust_decimal::Decimal`. See [`price`] for the
//! checked helpers used to compute subtotals and totals.

mod order;
mod product;
pub mod price;

// Re-export all types at module level
pub use order::{ItemRequest, LineItem, Order, OrderId};
pub use product::{Product, ProductId};
