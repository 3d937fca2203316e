//! Error kinds raised by the catalog, ledger and order desk.
//!
//! Every error is raised before any structural mutation, so the container
//! that produced it is left unchanged. None of them are transient: they
//! describe caller input and retrying the same call fails the same way.
//!
//! Lookups (`lookup`, `find`, `remove`) report absence with `Option`
//! instead of an error; the desk turns absence into
//! [`DeskError::ProductNotFound`] / [`DeskError::OrderNotFound`] where an
//! operation cannot proceed without the record.

use thiserror::Error;

/// Errors produced by desk operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeskError {
    /// A product or order with this id already exists.
    #[error("duplicate key: {0} already exists")]
    DuplicateKey(u64),

    /// An order line referenced a product that is not in the catalog.
    #[error("product {0} not found")]
    ProductNotFound(u64),

    /// The referenced order is not in the ledger.
    #[error("order {0} not found")]
    OrderNotFound(u64),

    /// The product does not have enough units on hand.
    #[error("insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: u64,
        requested: u32,
        available: u32,
    },

    /// An order line asked for zero units.
    #[error("invalid quantity for product {product_id}: must be greater than zero")]
    InvalidQuantity { product_id: u64 },

    /// A unit price was negative.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// `quantity * unit_price` does not fit in a decimal.
    #[error("subtotal overflow for product {product_id}")]
    SubtotalOverflow { product_id: u64 },

    /// The sum of subtotals does not fit in a decimal.
    #[error("total overflow for order {order_id}")]
    TotalOverflow { order_id: u64 },
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, DeskError>;
